use std::sync::Arc;

use axum::{Extension, response::Json};

use crate::{
    resolver::Resolver,
    spotify::search::SpotifyCatalog,
    types::{PlaylistRecommendation, RecommendRequest},
    warning,
    weather::OpenWeather,
};

/// Handles the single inbound operation of the service.
///
/// The body is read as a raw string rather than through the `Json`
/// extractor: a malformed or empty body must not produce a 4xx. Parse
/// failures are logged and replaced with the default request (mood
/// "DeepFocus", no city), after which resolution proceeds normally.
/// Always answers 200 with a complete recommendation.
pub async fn recommend(
    Extension(resolver): Extension<Arc<Resolver<OpenWeather, SpotifyCatalog>>>,
    body: String,
) -> Json<PlaylistRecommendation> {
    let request: RecommendRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            if !body.trim().is_empty() {
                warning!("Request body parse failed, using defaults: {}", e);
            }
            RecommendRequest::default()
        }
    };

    let mood = request.mood.unwrap_or_else(|| "DeepFocus".to_string());
    let recommendation = resolver.resolve(&mood, request.city.as_deref()).await;

    Json(recommendation)
}
