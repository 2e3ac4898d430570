use chrono::Utc;
use tokio::sync::Mutex;

use crate::{config, info, spotify, types::CatalogCredential, warning};

/// Process-lifetime cache for the Spotify client-credentials token.
///
/// Holds at most one credential behind an async mutex. Reads return the
/// cached token while it is fresh (more than the safety margin before its
/// reported expiry); otherwise a new exchange is attempted. The lock is
/// not held across the exchange, so concurrent callers hitting an expired
/// slot may each perform their own exchange. That duplication is
/// acceptable: the exchange is idempotent and stateless, and the provider
/// is the source of truth.
///
/// A failed exchange leaves the slot untouched and returns `None` for the
/// current call only. Missing client credentials are re-checked on every
/// call, so configuration added at runtime takes effect without a restart.
pub struct TokenCache {
    slot: Mutex<Option<CatalogCredential>>,
}

impl TokenCache {
    pub fn new() -> Self {
        TokenCache {
            slot: Mutex::new(None),
        }
    }

    /// Returns a usable bearer token, or `None` in degraded mode.
    ///
    /// `None` means either that no client id/secret is configured (warned,
    /// expected) or that the token exchange failed for this call (warned,
    /// upstream fault). Callers treat both the same way: skip the catalog
    /// and serve the curated fallback.
    pub async fn token(&self) -> Option<String> {
        let (Some(client_id), Some(client_secret)) =
            (config::spotify_client_id(), config::spotify_client_secret())
        else {
            warning!("Spotify client id/secret missing, using fallback playlists.");
            return None;
        };

        let now = Utc::now().timestamp() as u64;
        {
            let slot = self.slot.lock().await;
            if let Some(credential) = slot.as_ref() {
                if credential.is_fresh(now) {
                    return Some(credential.access_token.clone());
                }
            }
        }

        match spotify::auth::request_client_credentials(&client_id, &client_secret).await {
            Ok(credential) => {
                info!(
                    "Spotify token fetched, fresh for {}s",
                    credential.expires_at.saturating_sub(now)
                );
                let token = credential.access_token.clone();
                let mut slot = self.slot.lock().await;
                *slot = Some(credential);
                Some(token)
            }
            Err(e) => {
                warning!("Spotify token exchange failed: {}", e);
                None
            }
        }
    }

    /// Snapshot of the currently cached credential, if any.
    pub async fn current(&self) -> Option<CatalogCredential> {
        self.slot.lock().await.clone()
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
