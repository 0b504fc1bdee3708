//! Allow-listed token domain — a plain list query.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An allow-listed ERC-20 token record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AllowedToken {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub contract_address: String,
    pub created_at: DateTime<Utc>,
}
