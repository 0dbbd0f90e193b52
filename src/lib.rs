//! Leader/Follower Key-Value Node Library
//!
//! This library crate defines the core modules that make up a single node of
//! the replicated key-value service. It serves as the foundation for the
//! binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The node is composed of three loosely coupled subsystems:
//!
//! - **`node`**: The request-handling layer. Resolves configuration, defines
//!   the wire protocol (DTOs + endpoint paths), and enforces the leader-only
//!   write rule at the HTTP boundary.
//! - **`replication`**: The write propagation layer. Pushes accepted writes
//!   to the statically configured peers on a best-effort, fire-and-forget
//!   basis.
//! - **`store`**: The state layer. A lock-protected in-memory map paired
//!   with a single global version counter.

pub mod node;
pub mod replication;
pub mod store;
