//! HTTP client layer — `CanopyHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::CanopyHttp;
pub use retry::{RetryConfig, RetryPolicy};
