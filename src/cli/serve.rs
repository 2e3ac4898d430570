use std::sync::Arc;

use crate::{resolver::Resolver, server::start_api_server};

/// Starts the recommendation HTTP server with the production resolver.
///
/// The resolver (and with it the token cache) lives for the whole server
/// process; all requests share it.
pub async fn serve() {
    let resolver = Arc::new(Resolver::from_config());
    start_api_server(resolver).await;
}
