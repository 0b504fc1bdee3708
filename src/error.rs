//! Unified SDK error types.
//!
//! A `RelayError` response from the relay backend is deliberately *not* part
//! of this taxonomy — it is the documented recoverable variant of
//! [`RelayResult`](crate::domain::relay::RelayResult) and triggers the
//! fallback path instead of propagating as a failure.

use thiserror::Error;

use crate::shared::ProfileId;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A submission for profile {0} is already in flight")]
    InFlight(ProfileId),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors. Transport failures are never swallowed.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Wallet signing errors. None of these are retried automatically.
#[derive(Error, Debug)]
pub enum SignError {
    /// The user declined the signature request. Terminal.
    #[error("Signature request rejected by user")]
    Rejected,

    /// The wallet provider failed before producing a signature.
    #[error("Wallet provider error: {0}")]
    Provider(String),

    /// The wallet did not respond within the configured sign timeout.
    #[error("Timed out waiting for wallet signature")]
    Timeout,
}

/// Direct contract invocation errors. The contract call is the terminal
/// fallback, so these are final and surfaced as-is.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The user declined the transaction in their wallet.
    #[error("Transaction rejected by user")]
    Rejected,

    /// The contract reverted or the transaction failed on-chain.
    #[error("Contract execution failed: {0}")]
    Execution(String),

    /// The node/provider could not be reached.
    #[error("Contract transport error: {0}")]
    Transport(String),
}
