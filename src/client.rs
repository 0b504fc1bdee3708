//! High-level client — `CanopyClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs` (the
//! translate sub-client lives in `translate/client.rs`). This module keeps
//! the builder, session state, and accessor methods.

use crate::domain::profile::client::Profiles;
use crate::domain::tokens::client::Tokens;
use crate::domain::tokens::AllowedToken;
use crate::error::SdkError;
use crate::http::CanopyHttp;
use crate::session::{NonceTracker, Session};
use crate::translate::client::Translate;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::profile::client::Profiles as ProfilesClient;
pub use crate::domain::tokens::client::Tokens as TokensClient;
pub use crate::translate::client::Translate as TranslateClient;

/// The primary entry point for the Canopy SDK.
///
/// Provides nested sub-client accessors per domain: `client.profiles()`,
/// `client.tokens()`, `client.translate()`.
pub struct CanopyClient {
    pub(crate) http: CanopyHttp,
    /// Nonce counter + in-flight submission guard for the active account.
    pub(crate) session: Session,
    /// Translation provider endpoint and credentials.
    pub(crate) translate_url: String,
    pub(crate) translate_api_key: Option<String>,
    /// Token listing cache: (tokens, fetched_at). The server marks the
    /// listing long-lived, so it is cached client-side too.
    pub(crate) tokens_cache: Arc<RwLock<Option<(Vec<AllowedToken>, Instant)>>>,
    pub(crate) tokens_cache_ttl: Duration,
    /// Ceiling on how long a wallet may sit on a signature request.
    pub(crate) sign_timeout: Duration,
}

impl CanopyClient {
    pub fn builder() -> CanopyClientBuilder {
        CanopyClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn profiles(&self) -> Profiles<'_> {
        Profiles { client: self }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    pub fn translate(&self) -> Translate<'_> {
        Translate { client: self }
    }

    /// The signing nonce for the active account. Exposed for reconciliation
    /// with the backend's authoritative value (`sync`) and for inspection;
    /// submissions manage it internally via reserve/confirm.
    pub fn sig_nonce(&self) -> &NonceTracker {
        &self.session.nonce
    }

    /// Replace the access token injected into API requests.
    pub async fn set_auth_token(&self, token: Option<String>) {
        self.http.set_auth_token(token).await;
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.tokens_cache.write().await = None;
    }
}

impl Clone for CanopyClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            translate_url: self.translate_url.clone(),
            translate_api_key: self.translate_api_key.clone(),
            tokens_cache: self.tokens_cache.clone(),
            tokens_cache_ttl: self.tokens_cache_ttl,
            sign_timeout: self.sign_timeout,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CanopyClientBuilder {
    base_url: String,
    translate_url: String,
    translate_api_key: Option<String>,
    tokens_cache_ttl: Duration,
    http_timeout: Duration,
    sign_timeout: Duration,
    auth_token: Option<String>,
    initial_nonce: u64,
}

impl Default for CanopyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            translate_url: crate::network::DEFAULT_TRANSLATE_URL.to_string(),
            translate_api_key: None,
            tokens_cache_ttl: Duration::from_secs(60),
            http_timeout: Duration::from_secs(30),
            sign_timeout: Duration::from_secs(120),
            auth_token: None,
            initial_nonce: 0,
        }
    }
}

impl CanopyClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn translate_url(mut self, url: &str) -> Self {
        self.translate_url = url.to_string();
        self
    }

    pub fn translate_api_key(mut self, key: &str) -> Self {
        self.translate_api_key = Some(key.to_string());
        self
    }

    pub fn tokens_cache_ttl(mut self, ttl: Duration) -> Self {
        self.tokens_cache_ttl = ttl;
        self
    }

    /// Timeout applied to every HTTP request (API and translation provider).
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// How long to wait for wallet approval before failing the submission.
    pub fn sign_timeout(mut self, timeout: Duration) -> Self {
        self.sign_timeout = timeout;
        self
    }

    /// Pre-set an access token on construction.
    pub fn auth_token(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Seed the signing nonce with the backend's authoritative value.
    pub fn initial_nonce(mut self, nonce: u64) -> Self {
        self.initial_nonce = nonce;
        self
    }

    pub fn build(self) -> Result<CanopyClient, SdkError> {
        Ok(CanopyClient {
            http: CanopyHttp::new(&self.base_url, self.http_timeout, self.auth_token),
            session: Session::with_nonce(self.initial_nonce),
            translate_url: self.translate_url,
            translate_api_key: self.translate_api_key,
            tokens_cache: Arc::new(RwLock::new(None)),
            tokens_cache_ttl: self.tokens_cache_ttl,
            sign_timeout: self.sign_timeout,
        })
    }
}
