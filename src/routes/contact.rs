//! Quote request intake route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use zenith_client::state::contact::ContactPayload;

use crate::services::contact::{self, ContactError};
use crate::state::AppState;

/// `POST /api/contact`: accept a quote request.
///
/// The request is logged and, when mail is configured, forwarded to the
/// sales inbox. Returns `202 Accepted` on success.
pub async fn submit(State(state): State<AppState>, Json(body): Json<ContactPayload>) -> Result<StatusCode, StatusCode> {
    let payload = contact::validate(&body).map_err(|e| {
        tracing::info!(error = %e, "rejected quote request");
        contact_error_to_status(&e)
    })?;

    tracing::info!(
        name = %payload.name,
        email = %payload.email,
        has_phone = !payload.phone.is_empty(),
        has_address = !payload.address.is_empty(),
        "quote request received"
    );

    if let Some(mailer) = &state.mailer {
        mailer.send(&payload).await.map_err(|e| {
            tracing::error!(error = %e, "quote request forwarding failed");
            contact_error_to_status(&e)
        })?;
        tracing::info!(inbox = mailer.inbox(), "quote request forwarded");
    }

    Ok(StatusCode::ACCEPTED)
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingFields(_) => StatusCode::BAD_REQUEST,
        ContactError::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
