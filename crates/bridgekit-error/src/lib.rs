//! # Bridgekit Error
//!
//! Unified error types for the Bridgekit multi-chain bridge SDK. All chain
//! adapters and the SDK core report failures through [`SdkError`] so that
//! callers can branch on error kind without knowing which chain produced it.
//!
//! ## Error Categories
//!
//! - Configuration errors — a required field or registry entry is missing
//! - Domain absence — an account does not exist on the ledger
//! - Transport errors — RPC/network failures, propagated unmodified
//! - Unsupported operations — the invoked method does not apply to the chain family
//!
//! ## Example
//!
//! ```
//! use bridgekit_error::{Result, SdkError};
//!
//! fn require_origin_address(addr: Option<&str>) -> Result<&str> {
//!     addr.ok_or_else(|| SdkError::config("origin token address missing"))
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use thiserror::Error;

/// The main error type for Bridgekit SDK operations.
#[derive(Error, Debug)]
pub enum SdkError {
    // ============ Configuration Errors ============
    /// A required field or registry entry is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// No RPC endpoint is registered for the requested chain
    #[error("No node RPC URL configured for chain: {0}")]
    NodeRpcUrlNotConfigured(String),

    // ============ Ledger Errors ============
    /// The account does not exist on the ledger.
    ///
    /// This is a legitimate, common state and distinct from a connectivity
    /// or protocol failure; adapters decide per operation whether it maps
    /// to a zero balance or propagates.
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// The ledger or core API returned a response that could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The remote endpoint answered with a non-success status
    #[error("RPC request failed: {url} - status {status}")]
    RpcRequestFailed {
        /// Endpoint that failed
        url: String,
        /// HTTP status code
        status: u16,
    },

    // ============ Amount Errors ============
    /// A decimal amount string could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ============ Capability Errors ============
    /// The invoked method does not apply to this chain family
    #[error("Method not supported")]
    MethodNotSupported,

    // ============ Transport Conversions ============
    /// HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SdkError {
    /// Creates a configuration error from any displayable reason.
    pub fn config(reason: impl Into<String>) -> Self {
        SdkError::Config(reason.into())
    }

    /// Returns true if this error means the queried account does not exist.
    pub fn is_account_not_found(&self) -> bool {
        matches!(self, SdkError::AccountNotFound(_))
    }
}

/// Result type for Bridgekit SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
