//! # API Module
//!
//! HTTP endpoints for the recommendation server, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`recommend`] - The single inbound operation: accepts an optional
//!   JSON body `{mood?, city?}` and returns a complete recommendation.
//!   A malformed or absent body is tolerated, not rejected; processing
//!   proceeds with the default mood and no city. Because the resolver is
//!   a total function there is no inbound error status: the endpoint
//!   answers 200 in all cases.
//! - [`health`] - Health check returning service status and version for
//!   monitoring and deployment verification.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use devmood::api::{health, recommend};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/recommend", post(recommend));
//! ```

mod health;
mod recommend;

pub use health::health;
pub use recommend::recommend;
