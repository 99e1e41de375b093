// web_app/api/support.rs - Support contact endpoint

use crate::web_app::model::SupportMessage;

use super::{ApiClient, ApiError};

/// Post a contact message; no authentication involved.
///
/// Only success or failure comes back; the caller keeps the draft
/// around on failure so the user can retry.
pub async fn send_support_message(
    client: &ApiClient,
    message: &SupportMessage,
) -> Result<(), ApiError> {
    let response = client
        .http()
        .post(client.url("/support"))
        .json(message)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.status().is_success() {
        tracing::error!("support message failed with status {}", response.status());
        return Err(ApiError::Status(response.status().as_u16()));
    }

    tracing::info!("support message delivered");
    Ok(())
}
