//! Replication Module
//!
//! Pushes accepted writes to the statically configured peers.
//!
//! ## Core Concepts
//! - **Best effort**: Each peer gets exactly one delivery attempt per write;
//!   failures are logged and skipped. No retry, no backfill, no dead-peer
//!   tracking.
//! - **Fire and forget**: Sends run as spawned tasks that the originating
//!   write path never joins, so a client's write acknowledgment says nothing
//!   about replication.
//! - **Unordered**: Sends carry no sequence numbers, so concurrent writes to
//!   one key may reach a peer in either order and leave it diverged until
//!   the next write to that key.

pub mod agent;

#[cfg(test)]
mod tests;
