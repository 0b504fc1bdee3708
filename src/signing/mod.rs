//! Typed-data signing — payload types, the wallet seam, signature splitting.
//!
//! The typed-data payload is constructed by the signing backend; its shape is
//! dictated by the hub contract's signing scheme. Any reordering or retyping
//! of fields invalidates the signature, which is why the payload is modeled
//! as concrete structs: struct fields serialize in definition order, so a
//! round-trip through these types cannot reorder anything.

use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SignError};
use crate::shared::ProfileId;

// ─── Typed-data payload ──────────────────────────────────────────────────────

/// A full typed-data payload as constructed by the signing backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypedData {
    pub types: TypedDataTypes,
    pub domain: TypedDataDomain,
    pub value: SetProfileImageData,
}

/// Type descriptors for the signed struct. Field order within the vector is
/// part of the signing scheme and must be preserved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypedDataTypes {
    #[serde(rename = "SetProfileImageURIWithSig")]
    pub set_profile_image_uri_with_sig: Vec<TypedDataField>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypedDataField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The domain separator: binds the signature to one protocol deployment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataDomain {
    pub name: String,
    pub chain_id: u64,
    pub version: String,
    pub verifying_contract: String,
}

/// The signed fields of a profile-image update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetProfileImageData {
    pub nonce: u64,
    pub deadline: u64,
    #[serde(rename = "profileId")]
    pub profile_id: ProfileId,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
}

// ─── Signature ───────────────────────────────────────────────────────────────

/// A 65-byte ECDSA signature as a `0x`-prefixed hex string, exactly as the
/// wallet provider returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into the `(v, r, s)` components the contract call expects.
    ///
    /// Accepts the standard 65-byte layout: `r` (32 bytes) || `s` (32 bytes)
    /// || `v` (1 byte). A `v` of 0/1 is normalized to 27/28; any other value
    /// outside 27/28 is rejected.
    pub fn split(&self) -> Result<SignatureComponents, SdkError> {
        let hex_str = self.0.strip_prefix("0x").unwrap_or(&self.0);
        let bytes = hex::decode(hex_str)
            .map_err(|e| SdkError::Validation(format!("Malformed signature hex: {}", e)))?;
        if bytes.len() != 65 {
            return Err(SdkError::Validation(format!(
                "Signature must be 65 bytes, got {}",
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        let v = match bytes[64] {
            0 | 1 => bytes[64] + 27,
            27 | 28 => bytes[64],
            other => {
                return Err(SdkError::Validation(format!(
                    "Signature recovery id must be 0, 1, 27 or 28, got {}",
                    other
                )))
            }
        };

        Ok(SignatureComponents { v, r, s })
    }
}

impl From<&str> for Signature {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Signature {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three numeric components of a split signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureComponents {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl SignatureComponents {
    pub fn r_hex(&self) -> String {
        format!("0x{}", hex::encode(self.r))
    }

    pub fn s_hex(&self) -> String {
        format!("0x{}", hex::encode(self.s))
    }
}

// ─── Wallet seam ─────────────────────────────────────────────────────────────

/// Produces a signature over a typed-data payload using the active wallet.
///
/// Implemented by the embedding application (browser wallet adapter, hardware
/// wallet, local keypair). Suspends until the user approves or rejects; the
/// orchestrator wraps the call in its configured sign timeout and never
/// retries a rejection.
pub trait TypedDataSigner {
    fn sign_typed_data(
        &self,
        typed_data: &TypedData,
    ) -> impl std::future::Future<Output = Result<Signature, SignError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig_hex(r_byte: u8, s_byte: u8, v: u8) -> String {
        let mut s = String::from("0x");
        s.push_str(&hex::encode([r_byte; 32]));
        s.push_str(&hex::encode([s_byte; 32]));
        s.push_str(&hex::encode([v]));
        s
    }

    #[test]
    fn split_valid_signature() {
        let sig = Signature::from(sig_hex(0x11, 0x22, 28));
        let parts = sig.split().unwrap();
        assert_eq!(parts.v, 28);
        assert_eq!(parts.r, [0x11; 32]);
        assert_eq!(parts.s, [0x22; 32]);
        assert!(parts.r_hex().starts_with("0x1111"));
    }

    #[test]
    fn split_normalizes_recovery_id() {
        let sig = Signature::from(sig_hex(0xaa, 0xbb, 1));
        assert_eq!(sig.split().unwrap().v, 28);
        let sig = Signature::from(sig_hex(0xaa, 0xbb, 0));
        assert_eq!(sig.split().unwrap().v, 27);
    }

    #[test]
    fn split_rejects_out_of_range_recovery_id() {
        for v in [2u8, 26, 29, 255] {
            let sig = Signature::from(sig_hex(0xaa, 0xbb, v));
            assert!(
                matches!(sig.split(), Err(SdkError::Validation(_))),
                "recovery id {} must be rejected",
                v
            );
        }
    }

    #[test]
    fn split_rejects_wrong_length() {
        let sig = Signature::from("0xdeadbeef");
        assert!(sig.split().is_err());
    }

    #[test]
    fn split_rejects_bad_hex() {
        let sig = Signature::from("0xzz");
        assert!(sig.split().is_err());
    }

    #[test]
    fn typed_data_round_trip_preserves_field_order() {
        let json = serde_json::json!({
            "types": {
                "SetProfileImageURIWithSig": [
                    { "name": "profileId", "type": "uint256" },
                    { "name": "imageURI", "type": "string" },
                    { "name": "nonce", "type": "uint256" },
                    { "name": "deadline", "type": "uint256" }
                ]
            },
            "domain": {
                "name": "Canopy Protocol Profiles",
                "chainId": 137,
                "version": "1",
                "verifyingContract": "0xDb46d1Dc155634FbC732f92E853b10B288AD5a1d"
            },
            "value": {
                "nonce": 7,
                "deadline": 1700000000,
                "profileId": "0x01",
                "imageURI": "ipfs://bafy"
            }
        });
        let typed: TypedData = serde_json::from_value(json).unwrap();
        assert_eq!(typed.value.nonce, 7);
        assert_eq!(typed.types.set_profile_image_uri_with_sig[0].name, "profileId");
        assert_eq!(typed.types.set_profile_image_uri_with_sig[0].kind, "uint256");

        let back = serde_json::to_value(&typed).unwrap();
        assert_eq!(back["value"]["imageURI"], "ipfs://bafy");
        assert_eq!(
            back["types"]["SetProfileImageURIWithSig"][1]["name"],
            "imageURI"
        );
    }
}
