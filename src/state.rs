//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: the parsed config and, when mail forwarding is
//! configured, the Resend-backed mailer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::contact::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let mailer = config.mail.as_ref().map(|mail| Arc::new(Mailer::new(mail)));
        Self { config: Arc::new(config), mailer }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
