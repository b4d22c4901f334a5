use std::path::PathBuf;

use super::*;
use crate::config::MailConfig;

fn config(mail: Option<MailConfig>) -> ServerConfig {
    ServerConfig { port: 3000, assets_dir: PathBuf::from("public"), mail }
}

#[test]
fn new_without_mail_config_has_no_mailer() {
    let state = AppState::new(config(None));
    assert!(state.mailer.is_none());
    assert_eq!(state.config.port, 3000);
}

#[test]
fn new_with_mail_config_builds_mailer() {
    let state = AppState::new(config(Some(MailConfig {
        api_key: "re_test".into(),
        from: "site@zenithsolar.com".into(),
        inbox: "quotes@zenithsolar.com".into(),
    })));
    let mailer = state.mailer.expect("mailer");
    assert_eq!(mailer.inbox(), "quotes@zenithsolar.com");
}
