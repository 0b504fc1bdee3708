//! Profile domain — profiles, dispatcher authorization, mutation receipts.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

use crate::shared::{ProfileId, TxHash};

/// A protocol profile, as much of it as the mutation flows need.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    pub handle: String,
    /// Present when the profile has authorized a dispatcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dispatcher: Option<Dispatcher>,
}

impl Profile {
    /// Whether the gasless dispatcher path should be attempted first.
    pub fn can_use_relay(&self) -> bool {
        self.dispatcher
            .as_ref()
            .map(|d| d.can_use_relay)
            .unwrap_or(false)
    }
}

/// A relay-authorized signer that submits transactions on the profile
/// owner's behalf without the owner paying gas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dispatcher {
    pub address: String,
    pub can_use_relay: bool,
}

/// A single-use profile-image mutation request. Constructed per user action
/// and discarded after submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileImageRequest {
    pub profile_id: ProfileId,
    pub url: String,
}

/// Which route ultimately carried a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPath {
    /// Gasless relay, no signature from the user.
    Dispatcher,
    /// Typed-data signature broadcast through the relay.
    Broadcast,
    /// Direct contract call after the relay declined the broadcast.
    DirectContract,
}

/// Outcome of a successful mutation submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReceipt {
    pub tx_hash: TxHash,
    /// Relay-assigned id; absent on the direct contract path.
    pub tx_id: Option<String>,
    pub path: SubmissionPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_use_relay_requires_dispatcher_flag() {
        let mut profile = Profile {
            id: ProfileId::from("0x01"),
            handle: "alice.canopy".to_string(),
            dispatcher: None,
        };
        assert!(!profile.can_use_relay());

        profile.dispatcher = Some(Dispatcher {
            address: "0xfeed".to_string(),
            can_use_relay: false,
        });
        assert!(!profile.can_use_relay());

        profile.dispatcher.as_mut().unwrap().can_use_relay = true;
        assert!(profile.can_use_relay());
    }
}
