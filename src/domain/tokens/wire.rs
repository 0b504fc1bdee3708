//! Wire types for the tokens listing endpoint.

use serde::Deserialize;

use crate::domain::tokens::AllowedToken;

/// Response from `GET /tokens/all`. Tokens arrive ordered by creation time
/// descending; the server also sends a long-lived cache-control header, which
/// is why the sub-client keeps a TTL cache.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokensResponse {
    pub success: bool,
    pub tokens: Vec<AllowedToken>,
}
