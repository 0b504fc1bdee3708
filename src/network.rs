//! Network URL constants for the Canopy SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.canopy.social";

/// Default translation provider base URL (Google Cloud Translation v2).
pub const DEFAULT_TRANSLATE_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";
