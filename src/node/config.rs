use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// The role a node plays in the statically configured topology.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    /// The single node permitted to accept client writes.
    Leader,
    /// A node that only accepts replica-apply requests.
    Follower,
}

impl FromStr for NodeRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "leader" => Ok(NodeRole::Leader),
            "follower" => Ok(NodeRole::Follower),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRole::Leader => write!(f, "leader"),
            NodeRole::Follower => write!(f, "follower"),
        }
    }
}

/// Static configuration of one node, read once at process start and
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Identifier reported in responses and log lines.
    pub node_id: String,
    /// Write-permission role; see [`NodeRole`].
    pub role: NodeRole,
    /// HTTP listen port.
    pub port: u16,
    /// Peer base URLs (e.g. `http://node2:8001`) that accepted writes are
    /// pushed to. Empty for a single-node deployment.
    pub peers: Vec<String>,
}

impl NodeConfig {
    /// Resolves configuration from `NODE_ID`, `ROLE`, `PORT`, and `PEERS`.
    ///
    /// Missing or unparsable values fall back to defaults (node1 / leader /
    /// 8000 / no peers). A `ROLE` value that is neither `leader` nor
    /// `follower` makes the node write-rejecting, like a follower.
    pub fn from_env() -> Self {
        let node_id = env::var("NODE_ID").unwrap_or_else(|_| "node1".to_string());

        let role_raw = env::var("ROLE").unwrap_or_else(|_| "leader".to_string());
        let role = role_raw.parse().unwrap_or_else(|e: String| {
            tracing::warn!("{}, treating node as follower", e);
            NodeRole::Follower
        });

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        let peers = env::var("PEERS")
            .map(|raw| parse_peers(&raw))
            .unwrap_or_default();

        NodeConfig {
            node_id,
            role,
            port,
            peers,
        }
    }
}

fn parse_peers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|peer| !peer.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("leader".parse::<NodeRole>().unwrap(), NodeRole::Leader);
        assert_eq!("follower".parse::<NodeRole>().unwrap(), NodeRole::Follower);
        assert!("primary".parse::<NodeRole>().is_err());
    }

    #[test]
    fn test_parse_peers_trims_and_drops_empties() {
        let peers = parse_peers(" http://node2:8001 ,http://node3:8002, ,");
        assert_eq!(
            peers,
            vec![
                "http://node2:8001".to_string(),
                "http://node3:8002".to_string()
            ]
        );
    }

    #[test]
    fn test_parse_peers_empty_input() {
        assert!(parse_peers("").is_empty());
    }
}
