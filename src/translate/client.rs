//! Translate sub-client — detection and translation over the external
//! provider's REST endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::client::CanopyClient;
use crate::error::{HttpError, SdkError};
use crate::http::client::classify_status;
use crate::shared::LanguageTag;
use crate::translate::{decode_entities, strip_markdown, TranslationResult};

pub struct Translate<'a> {
    pub(crate) client: &'a CanopyClient,
}

impl<'a> Translate<'a> {
    /// Translate `text` into `target`.
    ///
    /// Markdown is stripped before submission and HTML entities in the
    /// provider's output are decoded before returning. Non-2xx responses
    /// reject with the mapped HTTP error, never a partial result.
    pub async fn translate(
        &self,
        text: &str,
        target: &LanguageTag,
    ) -> Result<TranslationResult, SdkError> {
        let source = strip_markdown(text);
        let body = serde_json::json!({
            "q": [source],
            "target": target,
        });

        let resp: TranslateResponse = self.post(&self.endpoint(""), &body).await?;
        let translation = resp
            .data
            .translations
            .into_iter()
            .next()
            .ok_or_else(|| {
                SdkError::Other("Translation response contained no translations".to_string())
            })?;

        Ok(TranslationResult {
            detected_source_language: LanguageTag::from(translation.detected_source_language),
            translated_text: decode_entities(&translation.translated_text),
        })
    }

    /// Detect the language of `text`: the primary language of the
    /// highest-confidence detection.
    ///
    /// Available for callers that need it; the translate-offer gate uses the
    /// local [`should_offer_translation`](crate::translate::should_offer_translation)
    /// comparison instead of a network round-trip.
    pub async fn detect(&self, text: &str) -> Result<LanguageTag, SdkError> {
        let body = serde_json::json!({ "q": [text] });

        let resp: DetectResponse = self.post(&self.endpoint("/detect"), &body).await?;
        let detection = resp
            .data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .ok_or_else(|| {
                SdkError::Other("Detection response contained no detections".to_string())
            })?;

        Ok(LanguageTag::from(detection.language))
    }

    fn endpoint(&self, path: &str) -> String {
        let mut url = format!(
            "{}{}",
            self.client.translate_url.trim_end_matches('/'),
            path
        );
        if let Some(key) = &self.client.translate_api_key {
            url = format!("{}?key={}", url, urlencoding::encode(key));
        }
        url
    }

    // The provider is a different host from the Canopy API, so this bypasses
    // `CanopyHttp`'s base URL and auth injection but shares its connection
    // pool and status mapping.
    async fn post<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<T, HttpError> {
        let resp = match self
            .client
            .http
            .raw_client()
            .post(url)
            .json(body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(HttpError::Reqwest(e)),
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }
        let body_text = resp.text().await.unwrap_or_default();
        Err(classify_status(status.as_u16(), body_text))
    }
}

// ─── Provider wire types ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
struct TranslateData {
    translations: Vec<WireTranslation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTranslation {
    detected_source_language: String,
    translated_text: String,
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    detections: Vec<Vec<WireDetection>>,
}

#[derive(Debug, Deserialize)]
struct WireDetection {
    language: String,
    #[serde(default)]
    #[allow(dead_code)]
    confidence: f64,
}
