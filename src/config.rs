//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Credentials for forwarding quote requests by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
    pub inbox: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub mail: Option<MailConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ASSETS_DIR`: directory holding `images/`, default `public`
    /// - `CONTACT_INBOX`, `RESEND_API_KEY`, `RESEND_FROM`: mail forwarding
    ///   is enabled only when all three are set and non-blank
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` is set but is not a port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_trimmed("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        };
        let assets_dir = env_trimmed("SITE_ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);
        let mail = mail_from_parts(env_trimmed("RESEND_API_KEY"), env_trimmed("RESEND_FROM"), env_trimmed("CONTACT_INBOX"));

        Ok(Self { port, assets_dir, mail })
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn mail_from_parts(api_key: Option<String>, from: Option<String>, inbox: Option<String>) -> Option<MailConfig> {
    Some(MailConfig { api_key: api_key?, from: from?, inbox: inbox? })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
