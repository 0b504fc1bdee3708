//! Direct hub-contract interaction — the terminal fallback.
//!
//! When the relay declines a broadcast, the orchestrator invokes the contract
//! function directly with the already-signed input, paying gas from the
//! user's account. There is no retry after this step.

pub mod constants;

use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::shared::{ProfileId, TxHash};
use crate::signing::SignatureComponents;

/// The signature block of an on-chain `...WithSig` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SigParts {
    pub v: u8,
    pub r: String,
    pub s: String,
    pub deadline: u64,
}

impl SigParts {
    pub fn new(components: &SignatureComponents, deadline: u64) -> Self {
        Self {
            v: components.v,
            r: components.r_hex(),
            s: components.s_hex(),
            deadline,
        }
    }
}

/// Input struct for `setProfileImageURIWithSig`, mirroring the contract ABI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetProfileImageUriWithSigInput {
    pub profile_id: ProfileId,
    #[serde(rename = "imageURI")]
    pub image_uri: String,
    pub sig: SigParts,
}

/// Write access to the hub contract.
///
/// Implemented by the embedding application on top of whatever node/provider
/// it already holds; the SDK only defines the call shape. Success or failure
/// here is final and surfaced to the caller unchanged.
pub trait HubContract {
    fn set_profile_image_uri_with_sig(
        &self,
        input: &SetProfileImageUriWithSigInput,
    ) -> impl std::future::Future<Output = Result<TxHash, ContractError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::Signature;

    #[test]
    fn input_struct_serializes_to_abi_names() {
        let mut raw = String::from("0x");
        raw.push_str(&hex::encode([0x01; 32]));
        raw.push_str(&hex::encode([0x02; 32]));
        raw.push_str("1c");
        let components = Signature::from(raw).split().unwrap();

        let input = SetProfileImageUriWithSigInput {
            profile_id: ProfileId::from("0x01"),
            image_uri: "ipfs://bafy".to_string(),
            sig: SigParts::new(&components, 1700000000),
        };

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["profileId"], "0x01");
        assert_eq!(json["imageURI"], "ipfs://bafy");
        assert_eq!(json["sig"]["v"], 28);
        assert_eq!(json["sig"]["deadline"], 1700000000u64);
        assert!(json["sig"]["r"].as_str().unwrap().starts_with("0x0101"));
    }
}
