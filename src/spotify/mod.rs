//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! recommendation pipeline: the client-credentials token exchange and the
//! playlist search. It handles all HTTP communication, authentication and
//! error handling for the catalog side of the system.
//!
//! ## Overview
//!
//! The integration is intentionally small. DevMood DJ never acts on behalf
//! of a user, so the full OAuth authorization-code machinery is not needed;
//! the app-only client-credentials grant covers the single read-only search
//! endpoint in use.
//!
//! ```text
//! Resolver
//!     ├── management::TokenCache  (token lifecycle)
//!     │        └── auth::request_client_credentials
//!     └── search::SpotifyCatalog  (playlist search)
//!              └── GET /search?type=playlist
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Performs the client-credentials token exchange: one POST
//!   with an HTTP Basic `id:secret` header, returning a bearer token and
//!   its absolute expiry. Credentials come from the environment and are
//!   never persisted.
//! - [`search`] - Issues the playlist search with bearer authorization,
//!   maps the wire shape into [`crate::types::PlaylistOption`] values and
//!   samples at most three of them with an injectable RNG.
//!
//! ## Error Handling Philosophy
//!
//! Failures never leave this module as errors the resolver has to handle:
//!
//! - `auth` returns `Result` to its only caller, the token cache, which
//!   converts failure into an absent token for the current call.
//! - `search` converts every failure (no token, transport error, non-2xx
//!   status, malformed or empty body) into an empty result list, logged
//!   at warning level.
//!
//! Each call is a single attempt bounded by the configured HTTP timeout.
//! There is no retry, backoff or rate-limit handling; availability is
//! guaranteed by the curated fallback catalog, not by insisting on the
//! live catalog.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials token exchange
//! - `GET /search` - Playlist search (`type=playlist`)

pub mod auth;
pub mod search;
