//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── ProfileId ───────────────────────────────────────────────────────────────

/// Newtype for on-chain profile identifiers (e.g. `"0x01a6"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for ProfileId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ProfileId(s.to_string()))
    }
}

impl Serialize for ProfileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProfileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ProfileId(s))
    }
}

// ─── TxHash ──────────────────────────────────────────────────────────────────

/// A transaction hash as a `0x`-prefixed hex string.
///
/// Serializes transparently as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for TxHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TxHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TxHash(s))
    }
}

// ─── LanguageTag ─────────────────────────────────────────────────────────────

/// A BCP 47-style language tag (e.g. `"en-US"`, `"fr"`, `"zh_CN"`).
///
/// Comparison for the translate-offer gate uses only the primary subtag:
/// region and script subtags are ignored, so `en-US` and `en-GB` compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, lowercased (`"en-US"` → `"en"`).
    pub fn primary_subtag(&self) -> String {
        self.0
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase()
    }

    /// Whether two tags share the same primary language, ignoring region and
    /// script subtags. Empty tags never match anything.
    pub fn same_primary_language(&self, other: &LanguageTag) -> bool {
        let a = self.primary_subtag();
        let b = other.primary_subtag();
        !a.is_empty() && a == b
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for LanguageTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(LanguageTag(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_id_serde() {
        let id = ProfileId::from("0x01a6");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0x01a6\"");
        let back: ProfileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_primary_subtag() {
        assert_eq!(LanguageTag::from("en-US").primary_subtag(), "en");
        assert_eq!(LanguageTag::from("zh_CN").primary_subtag(), "zh");
        assert_eq!(LanguageTag::from("fr").primary_subtag(), "fr");
        assert_eq!(LanguageTag::from("EN-gb").primary_subtag(), "en");
    }

    #[test]
    fn test_same_primary_language_ignores_region() {
        let en_us = LanguageTag::from("en-US");
        let en_gb = LanguageTag::from("en-GB");
        let fr_fr = LanguageTag::from("fr-FR");
        assert!(en_us.same_primary_language(&en_gb));
        assert!(!en_us.same_primary_language(&fr_fr));
    }

    #[test]
    fn test_empty_tag_never_matches() {
        let empty = LanguageTag::from("");
        assert!(!empty.same_primary_language(&empty));
        assert!(!empty.same_primary_language(&LanguageTag::from("en")));
    }
}
