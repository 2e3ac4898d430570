//! Recommendation orchestration.
//!
//! The resolver composes the weather lookup, the catalog search and the
//! curated fallback table into one total function: every input, including
//! an empty or garbled mood and a dead network, yields a complete
//! [`PlaylistRecommendation`]. The upstream components express their
//! failure modes as sentinel values (`Clear` bucket, empty result list)
//! rather than errors, so no error handling appears here and the
//! availability guarantee is visible in the signatures.

use std::sync::Arc;

use crate::{
    fallback,
    management::TokenCache,
    spotify::search::SpotifyCatalog,
    types::{FallbackEntry, PlaylistOption, PlaylistRecommendation, Source, WeatherBucket},
    warning,
    weather::OpenWeather,
};

/// Number of playlists requested from the catalog search before sampling.
pub const SEARCH_LIMIT: u32 = 10;

/// Seam over the weather provider. Implementations must be total:
/// `resolve_bucket` degrades internally instead of failing.
#[allow(async_fn_in_trait)]
pub trait WeatherSource {
    async fn resolve_bucket(&self, city: Option<&str>) -> WeatherBucket;
}

/// Seam over the playlist catalog. Implementations return an empty list
/// on any failure; the list is already sampled to the final option count.
#[allow(async_fn_in_trait)]
pub trait PlaylistSearch {
    async fn search(&self, query: &str, limit: u32) -> Vec<PlaylistOption>;
}

/// Orchestrates one recommendation request over the two upstream seams.
///
/// Generic over its collaborators so tests can drive it with stub weather
/// and catalog implementations; production code uses [`Resolver::from_config`].
pub struct Resolver<W, S> {
    weather: W,
    catalog: S,
}

impl Resolver<OpenWeather, SpotifyCatalog> {
    /// Builds the production resolver: OpenWeather lookup plus Spotify
    /// catalog search sharing one process-lifetime token cache.
    pub fn from_config() -> Self {
        let tokens = Arc::new(TokenCache::new());
        Resolver {
            weather: OpenWeather::new(),
            catalog: SpotifyCatalog::new(tokens),
        }
    }
}

impl<W: WeatherSource, S: PlaylistSearch> Resolver<W, S> {
    pub fn new(weather: W, catalog: S) -> Self {
        Resolver { weather, catalog }
    }

    /// Resolves a recommendation for the given mood and optional city.
    ///
    /// Three stages:
    /// 1. weather: derive the bucket for the city (degrades to Clear)
    /// 2. baseline: the curated fallback entry for (bucket, mood),
    ///    computed up front as the response skeleton and last resort
    /// 3. enrich: search the catalog with the curated hint query (or a
    ///    synthesized one for unknown moods) and overlay the results
    ///
    /// Total function; there is no error path back to the caller.
    pub async fn resolve(&self, mood: &str, city: Option<&str>) -> PlaylistRecommendation {
        let mood = if mood.is_empty() { "DeepFocus" } else { mood };

        let bucket = self.weather.resolve_bucket(city).await;
        let baseline = fallback::lookup(bucket, mood);

        let query = fallback::query_hint(bucket, mood)
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!(
                    "{} coding playlist {} weather",
                    mood,
                    bucket.to_string().to_lowercase()
                )
            });

        let results = self.catalog.search(&query, SEARCH_LIMIT).await;
        assemble(mood, bucket, baseline, results)
    }
}

/// Merges the fallback baseline with the catalog search results.
///
/// With a non-empty result list the first result becomes the primary
/// playlist (keeping the baseline url if the result's url is empty) and
/// the whole list becomes the options, tagged `source=catalog`. With an
/// empty list the baseline is served as-is with a single imageless option
/// built from it, tagged `source=fallback`.
pub fn assemble(
    mood: &str,
    bucket: WeatherBucket,
    baseline: FallbackEntry,
    results: Vec<PlaylistOption>,
) -> PlaylistRecommendation {
    if results.is_empty() {
        warning!("Catalog search returned no playlists, using fallback.");
        return PlaylistRecommendation {
            mood: mood.to_string(),
            weather: bucket,
            playlist_name: baseline.name.to_string(),
            playlist_url: baseline.url.to_string(),
            note: baseline.note.to_string(),
            source: Source::Fallback,
            options: vec![PlaylistOption {
                name: baseline.name.to_string(),
                url: baseline.url.to_string(),
                image_src: None,
                owner: None,
            }],
        };
    }

    let first = &results[0];
    let playlist_url = if first.url.is_empty() {
        baseline.url.to_string()
    } else {
        first.url.clone()
    };

    PlaylistRecommendation {
        mood: mood.to_string(),
        weather: bucket,
        playlist_name: first.name.clone(),
        playlist_url,
        note: baseline.note.to_string(),
        source: Source::Catalog,
        options: results,
    }
}
