//! Node Network Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) exchanged with
//! clients and with peer nodes (PUT, GET, Replication, introspection).
//!
//! These structures are serialized as JSON and sent over HTTP; the same
//! `ReplicateRequest` type is used on both sides of a replication push.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::config::NodeRole;

// --- API Endpoints ---

/// Public endpoint for client write requests (leader only).
pub const ENDPOINT_PUT: &str = "/put";
/// Public endpoint for client read requests; the key is a path segment.
pub const ENDPOINT_GET: &str = "/get";
/// Endpoint a peer pushes accepted writes to. Accepted regardless of role.
pub const ENDPOINT_REPLICATE: &str = "/replicate";
/// Liveness and summary endpoint.
pub const ENDPOINT_HEALTH: &str = "/health";
/// Static node metadata endpoint.
pub const ENDPOINT_META: &str = "/meta";
/// Full-state dump endpoint, for debugging only.
pub const ENDPOINT_DEBUG_STATE: &str = "/debug/state";

// --- Data Transfer Objects ---

/// Client request for writing a key.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutRequest {
    /// The data key.
    pub key: String,
    /// The value to store.
    pub value: String,
}

/// Acknowledgment for an accepted client write.
///
/// `version` is the global version assigned by the commit on the receiving
/// node. The acknowledgment says nothing about replication: peers may or may
/// not ever receive this write.
#[derive(Debug, Serialize, Deserialize)]
pub struct PutResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Post-increment global version on this node.
    pub version: u64,
}

/// Payload pushed from one node to a peer's replica-apply endpoint.
///
/// Carries no sequence number or origin marker; a receiving node applies it
/// exactly as a local put, in arrival order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplicateRequest {
    /// The data key.
    pub key: String,
    /// The value to store.
    pub value: String,
}

/// Acknowledgment for an applied replica write.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReplicateResponse {
    /// Always `"replicated"`.
    pub status: String,
    /// Post-increment global version on the applying node.
    pub version: u64,
}

/// Successful read response.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetResponse {
    pub key: String,
    pub value: String,
    /// Global version at the instant of the read, NOT the version at which
    /// this key was last written.
    pub version: u64,
    /// Identifier of the answering node.
    pub node: String,
}

/// Summary returned by the health endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    pub node: String,
    pub role: NodeRole,
    pub version: u64,
    pub key_count: usize,
}

/// Static configuration returned by the metadata endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetaResponse {
    pub node: String,
    pub role: NodeRole,
    pub port: u16,
    pub peers: Vec<String>,
}

/// Full store dump returned by the debug endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DebugStateResponse {
    pub node: String,
    pub role: NodeRole,
    pub version: u64,
    /// Snapshot copy of every entry on this node.
    pub store: HashMap<String, String>,
}

/// Body of client-visible rejections (404 on missing key, 403 on a write to
/// a non-leader).
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
