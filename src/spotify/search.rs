use std::sync::Arc;

use crate::{
    config,
    management::TokenCache,
    resolver::PlaylistSearch,
    types::{PlaylistOption, SearchResponse},
    utils, warning,
};

/// Spotify-backed implementation of the [`PlaylistSearch`] seam.
///
/// Holds a shared reference to the process-wide [`TokenCache`]; the cache
/// decides when a new token exchange is needed. Every failure path returns
/// an empty list, so the resolver never sees an error from the catalog.
#[derive(Clone)]
pub struct SpotifyCatalog {
    tokens: Arc<TokenCache>,
}

impl SpotifyCatalog {
    pub fn new(tokens: Arc<TokenCache>) -> Self {
        SpotifyCatalog { tokens }
    }
}

impl PlaylistSearch for SpotifyCatalog {
    async fn search(&self, query: &str, limit: u32) -> Vec<PlaylistOption> {
        search_playlists(&self.tokens, query, limit).await
    }
}

/// Searches the Spotify catalog for playlists matching `query`.
///
/// Requests up to `limit` playlists, then shuffles the returned items and
/// keeps at most [`utils::MAX_OPTIONS`] of them, mapped into the output
/// shape (image and owner are optional on the wire and stay optional).
///
/// # Degradation
///
/// Returns an empty list, with a warning, whenever:
/// - no token is available (unconfigured credentials or failed exchange)
/// - the request fails or times out
/// - the response has a non-success status
/// - the body is malformed or contains no playlist items
pub async fn search_playlists(tokens: &TokenCache, query: &str, limit: u32) -> Vec<PlaylistOption> {
    let Some(token) = tokens.token().await else {
        return Vec::new();
    };

    let api_url = format!("{}/search", config::spotify_apiurl());
    let limit = limit.to_string();

    let client = utils::http_client();
    let response = client
        .get(&api_url)
        .query(&[
            ("q", query),
            ("type", "playlist"),
            ("limit", limit.as_str()),
        ])
        .bearer_auth(token)
        .send()
        .await;

    let response = match response {
        Ok(resp) => resp,
        Err(e) => {
            warning!("Spotify search request failed: {}", e);
            return Vec::new();
        }
    };

    if !response.status().is_success() {
        warning!("Spotify search status: {}", response.status());
        return Vec::new();
    }

    let body = match response.json::<SearchResponse>().await {
        Ok(body) => body,
        Err(e) => {
            warning!("Spotify search body parse failed: {}", e);
            return Vec::new();
        }
    };

    // Spotify occasionally interleaves nulls in the items array.
    let items = body.playlists.map(|p| p.items).unwrap_or_default();
    let options: Vec<PlaylistOption> = items
        .into_iter()
        .flatten()
        .map(|pl| PlaylistOption {
            name: pl.name,
            url: pl
                .external_urls
                .and_then(|u| u.spotify)
                .unwrap_or_default(),
            image_src: pl
                .images
                .and_then(|imgs| imgs.into_iter().next())
                .map(|img| img.url),
            owner: pl.owner.and_then(|o| o.display_name),
        })
        .collect();

    if options.is_empty() {
        return Vec::new();
    }

    utils::sample_options(options, &mut rand::rng())
}
