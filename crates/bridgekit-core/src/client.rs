//! Core bridge API client.
//!
//! Thin JSON client for the bridge's central API: the source of truth for
//! which tokens are bridgeable and their metadata. Per-chain token services
//! hold a shared handle to it.

use crate::config::SdkOptions;
use crate::token_service::Token;
use bridgekit_error::{Result, SdkError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

/// Client for the core bridge API.
#[derive(Debug)]
pub struct CoreApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl CoreApiClient {
    /// Creates a client from the SDK options.
    ///
    /// Fails if the configured URL or any configured header is malformed.
    pub fn new(options: &SdkOptions) -> Result<Self> {
        let base_url = Url::parse(&options.core_api_url)?;
        let mut headers = HeaderMap::new();
        for (name, value) in &options.core_api_headers {
            let name = name
                .parse::<HeaderName>()
                .map_err(|e| SdkError::config(format!("invalid core API header name: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| SdkError::config(format!("invalid core API header value: {e}")))?;
            headers.insert(name, value);
        }
        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self { base_url, http })
    }

    /// Fetches the list of bridgeable tokens across all chains.
    pub async fn tokens(&self) -> Result<Vec<Token>> {
        let url = self.base_url.join("tokens")?;
        debug!(%url, "fetching token list from core API");
        let response = self.http.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(SdkError::RpcRequestFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let tokens = response
            .json::<Vec<Token>>()
            .await
            .map_err(|e| SdkError::MalformedResponse(e.to_string()))?;
        Ok(tokens)
    }
}
