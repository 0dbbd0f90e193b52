//! Node State Module
//!
//! Implements the in-memory key-value state of a single node.
//!
//! ## Core Concepts
//! - **Entries**: A flat map from string key to its latest string value. No
//!   per-key history or per-key version is retained.
//! - **Global version**: One process-wide counter, incremented by exactly one
//!   on every successful write application (local put or replica-apply).
//! - **Atomicity**: A single mutex covers the map and the counter, so a write
//!   and its version bump are one indivisible step to every reader.

pub mod memory;
