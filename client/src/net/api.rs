//! Browser adapter for the professionals REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a request error, since requests
//! are only issued from effects and event handlers in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status and body decoding are shared with the native adapter through
//! `ats::api::decode_response`, so both report the same `ApiError`s.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ats::api::{ApiError, ProfessionalsApi};
use ats::config::{ApiConfig, ConfigError};
use ats::types::{Professional, ProfessionalDraft, Source};

/// `fetch`-backed API adapter. Cheap to clone into spawned tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Adapter for the `ATS_API_URL` captured when the WASM bundle was built.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the captured URL is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        ApiConfig::from_build_env().map(|config| Self::from_config(&config))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Request(err.to_string())
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Request("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn read_body<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let text = resp.text().await.map_err(transport_error)?;
    ats::api::decode_response(status, &text)
}

#[async_trait::async_trait(?Send)]
impl ProfessionalsApi for BrowserApi {
    async fn list(&self, source: Option<Source>) -> Result<Vec<Professional>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = ats::api::list_endpoint(&self.base_url, source);
            tracing::debug!(%url, "list professionals");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(transport_error)?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = source;
            Err(unavailable())
        }
    }

    async fn create(&self, draft: &ProfessionalDraft) -> Result<Professional, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = ats::api::professionals_endpoint(&self.base_url);
            tracing::debug!(%url, "create professional");
            let resp = gloo_net::http::Request::post(&url)
                .json(draft)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_body(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            Err(unavailable())
        }
    }
}
