//! Wire types for the signing backend's typed-data endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::profile::UpdateProfileImageRequest;
use crate::signing::TypedData;

/// Request body for typed-data creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypedDataRequestBody {
    pub request: UpdateProfileImageRequest,
    pub options: TypedDataOptions,
}

/// Options for typed-data creation. The nonce override pins the payload to
/// the submission's reserved nonce so concurrent flows cannot race the
/// backend's own counter.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypedDataOptions {
    pub override_sig_nonce: u64,
}

/// Response from the signing backend: an opaque broadcast id plus the
/// payload to sign, passed through byte-for-byte to the wallet.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTypedDataResponse {
    pub id: String,
    pub expires_at: DateTime<Utc>,
    pub typed_data: TypedData,
}
