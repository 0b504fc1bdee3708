//! Tokens sub-client — list allow-listed tokens, with a TTL cache.

use std::time::Instant;

use crate::client::CanopyClient;
use crate::domain::tokens::AllowedToken;
use crate::error::SdkError;

pub struct Tokens<'a> {
    pub(crate) client: &'a CanopyClient,
}

impl<'a> Tokens<'a> {
    /// All allow-listed tokens, newest first. Served from the TTL cache when
    /// fresh; the server marks this listing as long-lived.
    pub async fn all(&self) -> Result<Vec<AllowedToken>, SdkError> {
        {
            let cache = self.client.tokens_cache.read().await;
            if let Some((tokens, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.tokens_cache_ttl {
                    return Ok(tokens.clone());
                }
            }
        }

        let resp = self.client.http.get_allowed_tokens().await?;
        *self.client.tokens_cache.write().await = Some((resp.tokens.clone(), Instant::now()));
        Ok(resp.tokens)
    }

    /// Drop the cached listing.
    pub async fn invalidate(&self) {
        *self.client.tokens_cache.write().await = None;
    }
}
