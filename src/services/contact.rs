//! Quote request intake: validation and email forwarding.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use zenith_client::state::contact::{ContactPayload, FormField};

use crate::config::MailConfig;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_request.html");

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing required fields: {}", join_keys(.0))]
    MissingFields(Vec<FormField>),
    #[error("email delivery failed: {0}")]
    EmailDelivery(String),
}

fn join_keys(fields: &[FormField]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

/// Trim every field and check the required ones with the same rules the
/// form applies in the browser.
///
/// # Errors
///
/// Returns [`ContactError::MissingFields`] listing each blank required field.
pub fn validate(payload: &ContactPayload) -> Result<ContactPayload, ContactError> {
    let trimmed = payload.trimmed();
    let missing = trimmed.missing_required();
    if missing.is_empty() {
        Ok(trimmed)
    } else {
        Err(ContactError::MissingFields(missing))
    }
}

/// Forwards validated quote requests to the sales inbox through Resend.
pub struct Mailer {
    resend: Resend,
    from: String,
    inbox: String,
}

impl Mailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone(), inbox: config.inbox.clone() }
    }

    #[must_use]
    pub fn inbox(&self) -> &str {
        &self.inbox
    }

    /// # Errors
    ///
    /// Returns [`ContactError::EmailDelivery`] when Resend rejects the send.
    pub async fn send(&self, payload: &ContactPayload) -> Result<(), ContactError> {
        let to = [self.inbox.as_str()];
        let subject = format!("Quote request from {}", payload.name);
        let html = render_contact_template(payload);

        let email = CreateEmailBaseOptions::new(&self.from, to, subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| ContactError::EmailDelivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn render_contact_template(payload: &ContactPayload) -> String {
    let or_dash = |v: &str| if v.is_empty() { "-".to_owned() } else { escape_html(v) };
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(&payload.name))
        .replace("{{EMAIL}}", &escape_html(&payload.email))
        .replace("{{PHONE}}", &or_dash(&payload.phone))
        .replace("{{ADDRESS}}", &or_dash(&payload.address))
        .replace("{{MESSAGE}}", &escape_html(&payload.message))
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
