//! SDK configuration: global options and the per-chain node RPC URL registry.

use crate::chains::ChainSymbol;
use bridgekit_error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Global SDK options, fixed at SDK initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdkOptions {
    /// Base URL of the core bridge API (token metadata, pool info)
    pub core_api_url: String,
    /// Optional headers sent with every core API request (e.g. an API key)
    #[serde(default)]
    pub core_api_headers: HashMap<String, String>,
}

impl SdkOptions {
    /// Creates options pointing at the given core API endpoint.
    pub fn new(core_api_url: impl Into<String>) -> Self {
        Self {
            core_api_url: core_api_url.into(),
            core_api_headers: HashMap::new(),
        }
    }

    /// Adds a header to send with every core API request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.core_api_headers.insert(name.into(), value.into());
        self
    }
}

/// Registry mapping each chain to its node RPC endpoint.
///
/// Populated once at SDK initialization. Resolving a chain with no registered
/// endpoint is a configuration error, not a silent fallback.
#[derive(Debug, Clone, Default)]
pub struct NodeRpcUrls {
    urls: HashMap<ChainSymbol, String>,
}

impl NodeRpcUrls {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the endpoint for a chain.
    pub fn insert(&mut self, symbol: ChainSymbol, url: impl Into<String>) {
        self.urls.insert(symbol, url.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_url(mut self, symbol: ChainSymbol, url: impl Into<String>) -> Self {
        self.insert(symbol, url);
        self
    }

    /// Resolves the base RPC endpoint for a chain.
    pub fn get_node_rpc_url(&self, symbol: ChainSymbol) -> Result<&str> {
        self.urls
            .get(&symbol)
            .map(String::as_str)
            .ok_or_else(|| SdkError::NodeRpcUrlNotConfigured(symbol.to_string()))
    }
}

impl From<HashMap<ChainSymbol, String>> for NodeRpcUrls {
    fn from(urls: HashMap<ChainSymbol, String>) -> Self {
        Self { urls }
    }
}
