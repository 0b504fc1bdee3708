//! Low-level HTTP client — `CanopyHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level `CanopyClient` wraps this.

use crate::domain::profile::wire::{
    CreateTypedDataResponse, TypedDataOptions, TypedDataRequestBody,
};
use crate::domain::profile::UpdateProfileImageRequest;
use crate::domain::relay::{BroadcastRequest, RelayResult};
use crate::domain::tokens::wire::TokensResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::signing::Signature;

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Canopy REST API.
pub struct CanopyHttp {
    base_url: String,
    client: Client,
    /// Access token for authenticated requests. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl CanopyHttp {
    pub fn new(base_url: &str, timeout: Duration, auth_token: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(auth_token)),
        }
    }

    /// The underlying reqwest client, shared with the translate sub-client.
    pub(crate) fn raw_client(&self) -> &Client {
        &self.client
    }

    /// Set the access token injected as a bearer header.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Ask the signing backend to construct a typed-data payload for a
    /// profile-image update, pinning the signing nonce to `nonce_override`.
    pub async fn create_set_profile_image_typed_data(
        &self,
        request: &UpdateProfileImageRequest,
        nonce_override: u64,
    ) -> Result<CreateTypedDataResponse, HttpError> {
        let url = format!(
            "{}/mutations/set-profile-image/typed-data",
            self.base_url
        );
        let body = TypedDataRequestBody {
            request: request.clone(),
            options: TypedDataOptions {
                override_sig_nonce: nonce_override,
            },
        };
        self.post(&url, &body, RetryPolicy::None).await
    }

    /// Submit a profile-image update through the gasless dispatcher.
    pub async fn set_profile_image_via_dispatcher(
        &self,
        request: &UpdateProfileImageRequest,
    ) -> Result<RelayResult, HttpError> {
        let url = format!(
            "{}/mutations/set-profile-image/via-dispatcher",
            self.base_url
        );
        let body = serde_json::json!({ "request": request });
        self.post(&url, &body, RetryPolicy::None).await
    }

    /// Broadcast a signed typed-data payload through the relay.
    pub async fn broadcast(
        &self,
        id: &str,
        signature: &Signature,
    ) -> Result<RelayResult, HttpError> {
        let url = format!("{}/transactions/broadcast", self.base_url);
        let body = BroadcastRequest {
            id: id.to_string(),
            signature: signature.clone(),
        };
        self.post(&url, &body, RetryPolicy::None).await
    }

    // ── Tokens ───────────────────────────────────────────────────────────

    /// Fetch all allow-listed tokens, newest first (server-ordered).
    pub async fn get_allowed_tokens(&self) -> Result<TokensResponse, HttpError> {
        let url = format!("{}/tokens/all", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::GET, url, None::<&()>, retry)
            .await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(reqwest::Method::POST, url, Some(body), retry)
            .await
    }

    async fn request_with_retry<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T, B>(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms))
                                    .await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: &reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(HttpError::Reqwest(e)),
        };
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        Err(classify_status(status_code, body_text))
    }
}

/// Map a non-2xx status into the HTTP error taxonomy. Shared with the
/// translate client, which talks to a different host.
pub(crate) fn classify_status(status: u16, body: String) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited {
            retry_after_ms: None,
        },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

impl Clone for CanopyHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}
