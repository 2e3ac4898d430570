//! Configuration management for DevMood DJ.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify and OpenWeather
//! credentials, upstream endpoint URLs, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Unlike settings that are required for the application to run at all
//! (there are none), every credential here is optional: a missing API key
//! or client secret puts the corresponding component into its documented
//! degraded mode instead of failing the process.

use dotenv;
use std::{env, path::PathBuf, time::Duration};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `devmood/.env`. This allows users to store
/// credentials securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/devmood/.env`
/// - macOS: `~/Library/Application Support/devmood/.env`
/// - Windows: `%LOCALAPPDATA%/devmood/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is loaded or absent. Since all
/// configuration keys are optional, a missing `.env` file is a normal
/// condition (the process simply runs fully degraded), so only directory
/// creation failures are reported as errors.
///
/// # Example
///
/// ```
/// use devmood::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("devmood/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the address for the recommendation HTTP server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the HTTP server should bind. Defaults to
/// `127.0.0.1:8080` when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".to_string())
}

/// Returns the OpenWeather API key, if configured.
///
/// Retrieves the `OPENWEATHER_API_KEY` environment variable. When absent
/// the weather lookup short-circuits to the Clear bucket; this is treated
/// as an expected degraded mode, not an error.
pub fn openweather_api_key() -> Option<String> {
    env::var("OPENWEATHER_API_KEY").ok().filter(|v| !v.is_empty())
}

/// Returns the default city for weather lookups, if configured.
///
/// Retrieves the `OPENWEATHER_CITY` environment variable. Used when the
/// caller does not supply a city; when this is also absent the lookup
/// falls back to the hardcoded default ("Helsinki,FI").
pub fn openweather_city() -> Option<String> {
    env::var("OPENWEATHER_CITY").ok().filter(|v| !v.is_empty())
}

/// Returns the OpenWeather current-weather endpoint URL.
///
/// Retrieves the `OPENWEATHER_API_URL` environment variable, defaulting to
/// the public OpenWeather API. Overridable so tests and local setups can
/// point the lookup at a mock server.
pub fn openweather_api_url() -> String {
    env::var("OPENWEATHER_API_URL")
        .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5/weather".to_string())
}

/// Returns the Spotify API client ID, if configured.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform. When absent (together with the secret) the catalog
/// search is skipped entirely and curated fallback playlists are served.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_CLIENT_ID").ok().filter(|v| !v.is_empty())
}

/// Returns the Spotify API client secret, if configured.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. This is
/// used together with the client ID for the client-credentials token
/// exchange.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_CLIENT_SECRET")
        .ok()
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints, defaulting to the public API.
/// This is used for the playlist search operation.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which
/// contains the URL for the client-credentials token exchange, defaulting
/// to Spotify's accounts service.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the timeout applied to upstream HTTP requests.
///
/// Retrieves the `HTTP_TIMEOUT_SECS` environment variable, defaulting to
/// 10 seconds. Each upstream call (weather lookup, token exchange, catalog
/// search) is a single attempt bounded by this timeout; there is no retry.
pub fn http_timeout() -> Duration {
    let secs = env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(10);
    Duration::from_secs(secs)
}
