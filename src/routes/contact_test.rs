use std::path::PathBuf;

use super::*;
use crate::config::ServerConfig;

fn state_without_mail() -> AppState {
    AppState::new(ServerConfig { port: 3000, assets_dir: PathBuf::from("public"), mail: None })
}

fn body(name: &str, email: &str) -> Json<ContactPayload> {
    Json(ContactPayload { name: name.into(), email: email.into(), ..ContactPayload::default() })
}

#[test]
fn contact_error_to_status_maps_missing_fields() {
    let err = ContactError::MissingFields(Vec::new());
    assert_eq!(contact_error_to_status(&err), StatusCode::BAD_REQUEST);
}

#[test]
fn contact_error_to_status_maps_delivery_failure() {
    let err = ContactError::EmailDelivery("503".into());
    assert_eq!(contact_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn submit_accepts_valid_request_without_mailer() {
    let status = submit(State(state_without_mail()), body("Jane", "jane@example.com"))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::ACCEPTED);
}

#[tokio::test]
async fn submit_rejects_blank_required_fields() {
    let status = submit(State(state_without_mail()), body(" ", "jane@example.com"))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
