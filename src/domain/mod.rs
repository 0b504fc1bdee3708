//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `client.rs` — Sub-client borrowing the high-level `CanopyClient`

pub mod profile;
pub mod relay;
pub mod tokens;
