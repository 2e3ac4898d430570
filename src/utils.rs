use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, seq::SliceRandom};
use reqwest::Client;

use crate::{config, types::PlaylistOption};

/// Upper bound on the number of playlist options returned to the caller,
/// regardless of how many the catalog search requested or received.
pub const MAX_OPTIONS: usize = 3;

/// Builds the HTTP client used for all upstream calls.
///
/// Applies the configured request timeout; each upstream call is a single
/// bounded attempt with no retry.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(config::http_timeout())
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Encodes `id:secret` for an HTTP Basic authorization header, as required
/// by the client-credentials token exchange.
pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
    STANDARD.encode(format!("{client_id}:{client_secret}"))
}

/// Shuffles search results and truncates them to [`MAX_OPTIONS`].
///
/// The RNG is injected so tests can pass a seeded generator and assert
/// deterministically; production callers pass `rand::rng()`. The output is
/// a subset of the input of size `min(MAX_OPTIONS, len)` in shuffled
/// order.
pub fn sample_options<R: Rng>(mut items: Vec<PlaylistOption>, rng: &mut R) -> Vec<PlaylistOption> {
    items.shuffle(rng);
    items.truncate(MAX_OPTIONS);
    items
}
