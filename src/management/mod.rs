//! # Management Module
//!
//! High-level state owned by the process. The only shared mutable state in
//! the whole application lives here: the cached Spotify client-credentials
//! token in [`TokenCache`]. The cache is constructed once per process and
//! handed to the catalog search by shared reference, which keeps its
//! lifetime caller-controlled and unit-testable instead of hiding it in a
//! global.

mod token;

pub use token::TokenCache;
