use chrono::Utc;
use serde_json::Value;

use crate::{config, types::CatalogCredential, utils};

/// Performs the OAuth 2.0 client-credentials token exchange with Spotify.
///
/// Sends a single POST to the configured token endpoint with the client
/// id and secret encoded as an HTTP Basic authorization header and a
/// `grant_type=client_credentials` form body. App-only flow: no user
/// interaction, no refresh token, no scopes.
///
/// # Arguments
///
/// * `client_id` - Spotify application client ID
/// * `client_secret` - Matching client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(CatalogCredential)` - Bearer token with its absolute expiry,
///   computed as now plus the provider-reported lifetime (3600s when the
///   field is absent)
/// - `Err(String)` - Transport error, non-success status, or a response
///   body without an access token
///
/// The exchange is idempotent and stateless on the provider side, so
/// concurrent invocations are harmless; the caller (the token cache)
/// decides which result to keep.
pub async fn request_client_credentials(
    client_id: &str,
    client_secret: &str,
) -> Result<CatalogCredential, String> {
    let basic = utils::encode_basic_credentials(client_id, client_secret);

    let client = utils::http_client();
    let res = client
        .post(config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!("token endpoint returned {}", res.status()));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    if access_token.is_empty() {
        return Err("token response missing access_token".to_string());
    }
    let expires_in = json["expires_in"].as_u64().unwrap_or(3600);

    Ok(CatalogCredential {
        access_token,
        expires_at: Utc::now().timestamp() as u64 + expires_in,
    })
}
