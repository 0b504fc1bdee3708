//! Relay wire types.
//!
//! Both relay endpoints (dispatcher submission and signature broadcast)
//! answer with the same tagged union: an ordinary success carrying the
//! transaction identifiers, or a `RelayError` — a recoverable, expected
//! condition that prompts the documented fallback path exactly once. It is
//! modeled as an explicit two-case enum rather than an error type so that
//! transport failures stay distinguishable and keep propagating.

use serde::{Deserialize, Serialize};

use crate::shared::TxHash;
use crate::signing::Signature;

/// Tagged relay response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "__typename")]
pub enum RelayResult {
    /// The relay accepted the request and submitted a transaction.
    RelayerResult(RelayerResult),
    /// The relay declined. Recoverable — the caller falls back.
    RelayError(RelayError),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelayerResult {
    pub tx_hash: TxHash,
    pub tx_id: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RelayError {
    pub reason: RelayErrorReason,
}

/// Why the relay declined a request.
///
/// Fallback dispatch keys on the `__typename` tag alone, so a reason string
/// this version does not know about must still deserialize. New reasons map
/// to [`Unknown`](Self::Unknown).
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelayErrorReason {
    Rejected,
    Expired,
    WrongWalletSigned,
    NotAllowed,
    RateLimited,
    #[serde(other)]
    Unknown,
}

/// Body of a broadcast request: the typed-data id handed out by the signing
/// backend plus the wallet signature over that payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BroadcastRequest {
    pub id: String,
    pub signature: Signature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_variant() {
        let json = serde_json::json!({
            "__typename": "RelayerResult",
            "txHash": "0xabc",
            "txId": "rly-1"
        });
        let result: RelayResult = serde_json::from_value(json).unwrap();
        match result {
            RelayResult::RelayerResult(r) => {
                assert_eq!(r.tx_hash.as_str(), "0xabc");
                assert_eq!(r.tx_id, "rly-1");
            }
            RelayResult::RelayError(_) => panic!("expected success variant"),
        }
    }

    #[test]
    fn unlisted_reason_maps_to_unknown() {
        let json = serde_json::json!({
            "__typename": "RelayError",
            "reason": "APP_GASLESS_BUDGET_EXCEEDED"
        });
        let result: RelayResult = serde_json::from_value(json).unwrap();
        assert_eq!(
            result,
            RelayResult::RelayError(RelayError {
                reason: RelayErrorReason::Unknown
            })
        );
    }

    #[test]
    fn deserializes_relay_error_variant() {
        let json = serde_json::json!({
            "__typename": "RelayError",
            "reason": "NOT_ALLOWED"
        });
        let result: RelayResult = serde_json::from_value(json).unwrap();
        assert_eq!(
            result,
            RelayResult::RelayError(RelayError {
                reason: RelayErrorReason::NotAllowed
            })
        );
    }
}
