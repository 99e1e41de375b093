// web_app/api/auth.rs - Login and profile resolution

use crate::web_app::model::{TokenResponse, UserProfile};

use super::{ApiClient, ApiError};

/// Exchange credentials for a bearer token.
///
/// The token endpoint takes a form-encoded body with `username` and
/// `password` fields. Any non-success response is an `Auth` failure so
/// the caller leaves prior session state untouched.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    let response = client
        .http()
        .post(client.url("/auth/token"))
        .form(&[("username", email), ("password", password)])
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.status().is_success() {
        tracing::info!("login rejected with status {}", response.status());
        return Err(ApiError::Auth);
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    tracing::info!("login succeeded");
    Ok(token.access_token)
}

/// Resolve the profile owned by a bearer token.
///
/// A rejected token is not an error: it yields `None` and the caller
/// treats the session as unauthenticated. Callers never invoke this
/// with an empty token; the session store short-circuits that case
/// without a network call.
pub async fn fetch_profile(
    client: &ApiClient,
    token: &str,
) -> Result<Option<UserProfile>, ApiError> {
    let response = client
        .http()
        .get(client.url("/me"))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.status().is_success() {
        tracing::info!("token rejected with status {}", response.status());
        return Ok(None);
    }

    let profile = response
        .json()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))?;
    Ok(Some(profile))
}
