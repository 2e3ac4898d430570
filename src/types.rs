use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Safety margin before a credential's reported expiry at which it is
/// proactively treated as expired.
pub const TOKEN_SAFETY_MARGIN_SECS: u64 = 60;

/// Coarse weather category used to index the fallback and search-hint
/// tables. Classification is total: anything unrecognized maps to `Clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherBucket {
    Clear,
    Rain,
    Clouds,
}

impl std::fmt::Display for WeatherBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeatherBucket::Clear => write!(f, "Clear"),
            WeatherBucket::Rain => write!(f, "Rain"),
            WeatherBucket::Clouds => write!(f, "Clouds"),
        }
    }
}

/// Client-credentials bearer token with its absolute expiry instant
/// (unix seconds). Owned by the `TokenCache`, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCredential {
    pub access_token: String,
    pub expires_at: u64,
}

impl CatalogCredential {
    /// Whether the credential is still usable at `now` (unix seconds),
    /// keeping the safety margin clear of the reported expiry.
    pub fn is_fresh(&self, now: u64) -> bool {
        now + TOKEN_SAFETY_MARGIN_SECS < self.expires_at
    }
}

/// Origin of the primary playlist in a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Catalog,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOption {
    pub name: String,
    pub url: String,
    pub image_src: Option<String>,
    pub owner: Option<String>,
}

/// Final response shape. `playlist_name` and `playlist_url` are always
/// non-empty: the fallback catalog guarantees a value for every
/// (bucket, mood) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecommendation {
    pub mood: String,
    pub weather: WeatherBucket,
    pub playlist_name: String,
    pub playlist_url: String,
    pub note: String,
    pub source: Source,
    pub options: Vec<PlaylistOption>,
}

/// Inbound request body. Both fields are optional; a malformed or absent
/// body is tolerated and replaced with defaults, never rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    pub mood: Option<String>,
    pub city: Option<String>,
}

/// One curated entry of the static fallback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
    pub name: &'static str,
    pub url: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub playlists: Option<PlaylistPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    #[serde(default)]
    pub items: Vec<Option<PlaylistItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub name: String,
    pub external_urls: Option<ExternalUrls>,
    pub images: Option<Vec<Image>>,
    pub owner: Option<PlaylistOwner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Tabled)]
pub struct OptionTableRow {
    pub name: String,
    pub owner: String,
    pub url: String,
}
