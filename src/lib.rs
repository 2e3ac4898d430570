//! DevMood DJ Library
//!
//! This library recommends music playlists to software developers based on
//! self-reported mood and local weather. It includes modules for weather
//! classification, Spotify catalog search with credential caching, a curated
//! fallback catalog, and the resolver that ties them together behind an
//! "always degrade, never fail" contract.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the recommendation server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `fallback` - Curated fallback playlists and search-hint tables
//! - `management` - Process-lifetime token caching
//! - `resolver` - Recommendation orchestration over the upstream seams
//! - `server` - HTTP server hosting the recommendation endpoint
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `weather` - Weather bucket classification and lookup
//!
//! # Example
//!
//! ```
//! use devmood::{config, resolver::Resolver};
//!
//! #[tokio::main]
//! async fn main() -> devmood::Res<()> {
//!     config::load_env().await?;
//!     let resolver = Resolver::from_config();
//!     let rec = resolver.resolve("DeepFocus", None).await;
//!     println!("{} -> {}", rec.playlist_name, rec.playlist_url);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod fallback;
pub mod management;
pub mod resolver;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;
pub mod weather;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// Note that the recommendation pipeline itself never surfaces errors:
/// upstream components return sentinel values (`Option`, empty `Vec`) so
/// the resolver stays a total function. `Res` is used for the plumbing
/// around it (configuration loading, server startup).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Weather bucket for {}: {}", city, bucket);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Spotify token fetched, expires in {}s", expires_in);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable
/// CLI-level failures (e.g. the server address cannot be parsed); the
/// recommendation pipeline itself never uses it; degraded upstreams log a
/// warning and fall back instead.
///
/// # Example
///
/// ```
/// error!("Failed to parse server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// degraded conditions that don't require termination: missing credentials,
/// failed upstream calls, fallback activations.
///
/// # Example
///
/// ```
/// warning!("OPENWEATHER_API_KEY missing, defaulting to Clear.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
