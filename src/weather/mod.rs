//! # Weather Module
//!
//! This module derives the coarse weather bucket that drives playlist
//! selection. It has two halves:
//!
//! - [`classify`] - a pure, total mapping from a raw weather-condition
//!   string to one of the three [`crate::types::WeatherBucket`] values.
//! - [`lookup`] - the OpenWeather client that fetches the current condition
//!   for a city and runs it through the classifier.
//!
//! ## Degradation contract
//!
//! The lookup never fails outward. A missing API key, an unreachable
//! provider, a non-2xx status, or a malformed body all resolve to
//! `WeatherBucket::Clear` with a warning; the caller cannot observe an
//! error. The classifier itself has no failure mode at all.

pub mod classify;
pub mod lookup;

pub use classify::classify;
pub use lookup::OpenWeather;
