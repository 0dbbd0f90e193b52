use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use kvnode::node::config::NodeConfig;
use kvnode::node::handlers::*;
use kvnode::replication::agent::ReplicationAgent;
use kvnode::store::memory::KeyValueStore;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Configuration (read once, immutable for the process lifetime):
    let config = Arc::new(NodeConfig::from_env());
    tracing::info!(
        "[{}] starting as {}, peers={:?}",
        config.node_id,
        config.role,
        config.peers
    );

    // 2. State layer:
    let store = Arc::new(KeyValueStore::new());

    // 3. Replication layer:
    let replicator = Arc::new(ReplicationAgent::new(config.peers.clone())?);

    // 4. HTTP Router:
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/meta", get(handle_meta))
        .route("/get/:key", get(handle_get))
        .route("/put", post(handle_put))
        .route("/replicate", post(handle_replicate))
        .route("/debug/state", get(handle_debug_state))
        .layer(Extension(Arc::clone(&config)))
        .layer(Extension(store))
        .layer(Extension(replicator));

    // 5. Start HTTP server:
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
