use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api, config, error, info, resolver::Resolver, spotify::search::SpotifyCatalog,
    weather::OpenWeather,
};

pub async fn start_api_server(resolver: Arc<Resolver<OpenWeather, SpotifyCatalog>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/recommend", post(api::recommend).layer(Extension(resolver)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Listening on {}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
