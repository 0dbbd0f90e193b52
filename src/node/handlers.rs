use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::config::{NodeConfig, NodeRole};
use super::protocol::{
    DebugStateResponse, ErrorResponse, GetResponse, HealthResponse, MetaResponse, PutRequest,
    PutResponse, ReplicateRequest, ReplicateResponse,
};
use crate::replication::agent::ReplicationAgent;
use crate::store::memory::KeyValueStore;

pub async fn handle_health(
    Extension(config): Extension<Arc<NodeConfig>>,
    Extension(store): Extension<Arc<KeyValueStore>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (snapshot, version) = store.dump_all();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            node: config.node_id.clone(),
            role: config.role,
            version,
            key_count: snapshot.len(),
        }),
    )
}

pub async fn handle_meta(
    Extension(config): Extension<Arc<NodeConfig>>,
) -> (StatusCode, Json<MetaResponse>) {
    (
        StatusCode::OK,
        Json(MetaResponse {
            node: config.node_id.clone(),
            role: config.role,
            port: config.port,
            peers: config.peers.clone(),
        }),
    )
}

pub async fn handle_get(
    Extension(config): Extension<Arc<NodeConfig>>,
    Extension(store): Extension<Arc<KeyValueStore>>,
    Path(key): Path<String>,
) -> Response {
    match store.get(&key) {
        (Some(value), version) => (
            StatusCode::OK,
            Json(GetResponse {
                key,
                value,
                version,
                node: config.node_id.clone(),
            }),
        )
            .into_response(),
        (None, _) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "key not found".to_string(),
            }),
        )
            .into_response(),
    }
}

pub async fn handle_put(
    Extension(config): Extension<Arc<NodeConfig>>,
    Extension(store): Extension<Arc<KeyValueStore>>,
    Extension(replicator): Extension<Arc<ReplicationAgent>>,
    Json(req): Json<PutRequest>,
) -> Response {
    if config.role != NodeRole::Leader {
        tracing::warn!(
            "[{}] rejected PUT {}: writes only allowed on leader",
            config.node_id,
            req.key
        );
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "writes only allowed on leader".to_string(),
            }),
        )
            .into_response();
    }

    let version = store.put(req.key.clone(), req.value.clone());
    tracing::info!(
        "[{}] PUT {}={}, version={}",
        config.node_id,
        req.key,
        req.value,
        version
    );

    // Hand-off only; the response does not wait on any peer.
    replicator.replicate_put(&req.key, &req.value);

    (
        StatusCode::OK,
        Json(PutResponse {
            status: "ok".to_string(),
            version,
        }),
    )
        .into_response()
}

pub async fn handle_replicate(
    Extension(config): Extension<Arc<NodeConfig>>,
    Extension(store): Extension<Arc<KeyValueStore>>,
    Json(req): Json<ReplicateRequest>,
) -> (StatusCode, Json<ReplicateResponse>) {
    // Applied regardless of role and without an origin check; this is how
    // followers acquire data.
    let version = store.put(req.key.clone(), req.value.clone());
    tracing::info!(
        "[{}] REPLICATED {}={}, version={}",
        config.node_id,
        req.key,
        req.value,
        version
    );

    (
        StatusCode::OK,
        Json(ReplicateResponse {
            status: "replicated".to_string(),
            version,
        }),
    )
}

pub async fn handle_debug_state(
    Extension(config): Extension<Arc<NodeConfig>>,
    Extension(store): Extension<Arc<KeyValueStore>>,
) -> (StatusCode, Json<DebugStateResponse>) {
    let (snapshot, version) = store.dump_all();

    (
        StatusCode::OK,
        Json(DebugStateResponse {
            node: config.node_id.clone(),
            role: config.role,
            version,
            store: snapshot,
        }),
    )
}
