use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

use crate::node::protocol::{ENDPOINT_REPLICATE, ReplicateRequest};

/// Per-call timeout on outbound replication pushes. A timed-out send counts
/// as a failed send: logged, never retried.
const REPLICATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Propagates accepted writes to every configured peer.
///
/// Independent of the store: the agent only knows the peer list it was built
/// with and the write it is handed. All delivery guarantees (and their
/// absence) are documented on [`ReplicationAgent::replicate_put`].
#[derive(Debug, Clone)]
pub struct ReplicationAgent {
    peers: Vec<String>,
    client: Client,
}

impl ReplicationAgent {
    pub fn new(peers: Vec<String>) -> Result<Self> {
        let client = Client::builder().timeout(REPLICATION_TIMEOUT).build()?;

        Ok(ReplicationAgent { peers, client })
    }

    /// The configured peer base URLs.
    pub fn peers(&self) -> &[String] {
        &self.peers
    }

    /// Hands an accepted write to every peer without waiting for delivery.
    ///
    /// Spawns one send task per peer and returns immediately; the caller
    /// cannot observe completion, success, or failure of any send. An empty
    /// peer list is the normal single-node outcome and does nothing. Each
    /// peer gets a single attempt: a timeout, connection error, or
    /// non-success status is logged and the write is never redelivered.
    pub fn replicate_put(&self, key: &str, value: &str) {
        if self.peers.is_empty() {
            tracing::debug!("No peers configured, skipping replication");
            return;
        }

        for peer in &self.peers {
            let url = format!("{}{}", peer.trim_end_matches('/'), ENDPOINT_REPLICATE);
            let client = self.client.clone();
            let body = ReplicateRequest {
                key: key.to_string(),
                value: value.to_string(),
            };

            tokio::spawn(async move {
                match client.post(&url).json(&body).send().await {
                    Ok(resp) if resp.status().is_success() => {
                        tracing::debug!("Replicated {} to {}", body.key, url);
                    }
                    Ok(resp) => {
                        tracing::warn!(
                            "Replication to {} failed with status: {}",
                            url,
                            resp.status()
                        );
                    }
                    Err(e) => {
                        tracing::warn!("Replication to {} failed: {}", url, e);
                    }
                }
            });
        }
    }
}
