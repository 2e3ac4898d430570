use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rand::{SeedableRng, rngs::StdRng};

use devmood::fallback;
use devmood::resolver::{PlaylistSearch, Resolver, WeatherSource};
use devmood::types::{PlaylistOption, Source, WeatherBucket};
use devmood::utils::sample_options;

/// Weather stub returning a fixed bucket, standing in for a provider that
/// is either healthy or fully degraded (Clear).
struct FixedWeather(WeatherBucket);

impl WeatherSource for FixedWeather {
    async fn resolve_bucket(&self, _city: Option<&str>) -> WeatherBucket {
        self.0
    }
}

/// Catalog stub returning nothing, standing in for an unreachable or
/// unconfigured catalog.
struct DeadCatalog;

impl PlaylistSearch for DeadCatalog {
    async fn search(&self, _query: &str, _limit: u32) -> Vec<PlaylistOption> {
        Vec::new()
    }
}

/// Catalog stub returning a seeded sample of fixed items, mirroring what
/// the live search does after a successful response. Records the queries
/// it receives so tests can assert the hint-table wiring.
struct FixedCatalog {
    items: Vec<PlaylistOption>,
    seed: u64,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FixedCatalog {
    fn new(items: Vec<PlaylistOption>, seed: u64) -> Self {
        FixedCatalog {
            items,
            seed,
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl PlaylistSearch for FixedCatalog {
    async fn search(&self, query: &str, _limit: u32) -> Vec<PlaylistOption> {
        self.queries.lock().unwrap().push(query.to_string());
        sample_options(self.items.clone(), &mut StdRng::seed_from_u64(self.seed))
    }
}

fn mock_item(i: usize) -> PlaylistOption {
    PlaylistOption {
        name: format!("Mock Playlist {i}"),
        url: format!("https://open.spotify.com/playlist/mock{i}"),
        image_src: Some(format!("https://i.scdn.co/image/mock{i}")),
        owner: Some("Mock Owner".to_string()),
    }
}

#[tokio::test]
async fn test_resolve_degrades_to_fallback_when_everything_is_down() {
    let resolver = Resolver::new(FixedWeather(WeatherBucket::Clear), DeadCatalog);
    let rec = resolver.resolve("DeepFocus", None).await;

    let baseline = fallback::lookup(WeatherBucket::Clear, "DeepFocus");
    assert_eq!(rec.source, Source::Fallback);
    assert_eq!(rec.weather, WeatherBucket::Clear);
    assert_eq!(rec.playlist_name, baseline.name);
    assert_eq!(rec.playlist_url, baseline.url);
    assert_eq!(rec.note, baseline.note);

    // Exactly one option, built from the baseline, without an image
    assert_eq!(rec.options.len(), 1);
    assert_eq!(rec.options[0].url, baseline.url);
    assert_eq!(rec.options[0].name, baseline.name);
    assert!(rec.options[0].image_src.is_none());
}

#[tokio::test]
async fn test_resolve_enriches_from_catalog_results() {
    let items: Vec<PlaylistOption> = (0..5).map(mock_item).collect();
    let item_urls: HashSet<String> = items.iter().map(|o| o.url.clone()).collect();

    let resolver = Resolver::new(
        FixedWeather(WeatherBucket::Clouds),
        FixedCatalog::new(items, 3),
    );
    let rec = resolver.resolve("FeelGood", Some("London,GB")).await;

    assert_eq!(rec.source, Source::Catalog);
    assert_eq!(rec.weather, WeatherBucket::Clouds);
    assert_eq!(rec.options.len(), 3);
    for opt in &rec.options {
        assert!(item_urls.contains(&opt.url), "option not from mocked set");
    }

    // Primary playlist comes from the first sampled result
    assert_eq!(rec.playlist_name, rec.options[0].name);
    assert_eq!(rec.playlist_url, rec.options[0].url);

    // The note stays from the curated baseline even for catalog results
    let baseline = fallback::lookup(WeatherBucket::Clouds, "FeelGood");
    assert_eq!(rec.note, baseline.note);
}

#[tokio::test]
async fn test_resolve_is_idempotent_under_a_fixed_seed() {
    let items: Vec<PlaylistOption> = (0..5).map(mock_item).collect();

    let resolver = Resolver::new(
        FixedWeather(WeatherBucket::Rain),
        FixedCatalog::new(items.clone(), 99),
    );
    let first = resolver.resolve("Motivation", None).await;

    let resolver = Resolver::new(
        FixedWeather(WeatherBucket::Rain),
        FixedCatalog::new(items, 99),
    );
    let second = resolver.resolve("Motivation", None).await;

    assert_eq!(first.playlist_name, second.playlist_name);
    assert_eq!(first.playlist_url, second.playlist_url);
    assert_eq!(first.options, second.options);
}

#[tokio::test]
async fn test_resolve_uses_hint_query_for_known_pairs() {
    let catalog = FixedCatalog::new(vec![mock_item(0)], 0);
    let queries = Arc::clone(&catalog.queries);
    let resolver = Resolver::new(FixedWeather(WeatherBucket::Rain), catalog);
    resolver.resolve("DeepFocus", None).await;

    let queries = queries.lock().unwrap().clone();
    assert_eq!(queries, vec!["lofi rain coding focus".to_string()]);
}

#[tokio::test]
async fn test_resolve_synthesizes_query_for_unknown_moods() {
    let catalog = FixedCatalog::new(vec![mock_item(0)], 0);
    let queries = Arc::clone(&catalog.queries);
    let resolver = Resolver::new(FixedWeather(WeatherBucket::Clouds), catalog);
    let rec = resolver.resolve("Chaos", None).await;

    let queries = queries.lock().unwrap().clone();
    assert_eq!(
        queries,
        vec!["Chaos coding playlist clouds weather".to_string()]
    );

    // Unknown mood is echoed back but selects the DeepFocus baseline note
    assert_eq!(rec.mood, "Chaos");
    let baseline = fallback::lookup(WeatherBucket::Clouds, "DeepFocus");
    assert_eq!(rec.note, baseline.note);
}

#[tokio::test]
async fn test_resolve_defaults_empty_mood_to_deep_focus() {
    let resolver = Resolver::new(FixedWeather(WeatherBucket::Clear), DeadCatalog);
    let rec = resolver.resolve("", None).await;

    assert_eq!(rec.mood, "DeepFocus");
    let baseline = fallback::lookup(WeatherBucket::Clear, "DeepFocus");
    assert_eq!(rec.playlist_url, baseline.url);
}

#[tokio::test]
async fn test_resolve_keeps_baseline_url_when_result_url_is_empty() {
    let item = PlaylistOption {
        name: "Unlinked Playlist".to_string(),
        url: String::new(),
        image_src: None,
        owner: None,
    };
    let resolver = Resolver::new(
        FixedWeather(WeatherBucket::Clear),
        FixedCatalog::new(vec![item], 0),
    );
    let rec = resolver.resolve("LightCoding", None).await;

    let baseline = fallback::lookup(WeatherBucket::Clear, "LightCoding");
    assert_eq!(rec.source, Source::Catalog);
    assert_eq!(rec.playlist_name, "Unlinked Playlist");
    assert_eq!(rec.playlist_url, baseline.url);
}
