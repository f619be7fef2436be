//! The polymorphic per-chain token service contract.
//!
//! Every chain family ships one [`TokenService`] implementation. Balance
//! queries are always available; the approval surface only applies to chain
//! families with an allowance model (EVM-style chains). Families without one
//! keep the methods but fail them with [`SdkError::MethodNotSupported`], and
//! advertise the gap through [`TokenService::supports_approvals`] so callers
//! can branch on capability instead of catching the error.

use crate::chains::{ChainSymbol, ChainType};
use async_trait::async_trait;
use bridgekit_error::Result;
use serde::{Deserialize, Serialize};

/// A bridgeable asset as described by the core bridge API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Asset symbol (e.g. "USDC")
    pub symbol: String,
    /// Chain the token lives on
    pub chain_symbol: ChainSymbol,
    /// Token contract/trustline address on its chain
    pub token_address: String,
    /// Composite key identifying the asset on its origin ledger.
    ///
    /// For the Stellar/Soroban family this encodes `"assetCode:issuerAddress"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_token_address: Option<String>,
    /// Token decimal precision as reported by the core API
    pub decimals: u8,
}

/// Parameters for a token balance query.
#[derive(Debug, Clone)]
pub struct GetTokenBalanceParams {
    /// Account identifier on the token's chain
    pub account: String,
    /// The token to query
    pub token: Token,
}

/// Parameters for a native-asset balance query.
#[derive(Debug, Clone)]
pub struct GetNativeTokenBalanceParams {
    /// Account identifier on the chain
    pub account: String,
    /// Chain whose native asset is queried
    pub chain_symbol: ChainSymbol,
}

/// Parameters for allowance queries and approvals on chains that have them.
#[derive(Debug, Clone)]
pub struct ApproveParams {
    /// Owner account
    pub owner: String,
    /// The token being approved
    pub token: Token,
    /// Spender contract address
    pub spender: String,
}

/// Outcome of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction identifier on the chain
    pub tx_id: String,
}

/// An unsigned chain-specific transaction payload.
pub type RawTransaction = serde_json::Value;

/// Per-chain token operations.
///
/// Balance results are non-negative integer strings in the asset's smallest
/// unit, never fractional, never exponent-notated.
#[async_trait]
pub trait TokenService: Send + Sync {
    /// The chain family this service answers for.
    fn chain_type(&self) -> ChainType;

    /// Whether this chain family has an allowance/approval model.
    ///
    /// When this returns `false`, the three approval methods always fail with
    /// [`SdkError::MethodNotSupported`](bridgekit_error::SdkError::MethodNotSupported).
    fn supports_approvals(&self) -> bool {
        false
    }

    /// Returns the account's balance of the given token, in smallest units.
    async fn get_token_balance(&self, params: &GetTokenBalanceParams) -> Result<String>;

    /// Returns the account's native-asset balance, in smallest units.
    async fn get_native_token_balance(&self, params: &GetNativeTokenBalanceParams)
        -> Result<String>;

    /// Returns the spender's remaining allowance, in smallest units.
    async fn get_allowance(&self, params: &ApproveParams) -> Result<String>;

    /// Submits an approval transaction.
    async fn approve(&self, params: &ApproveParams) -> Result<TransactionResponse>;

    /// Builds an unsigned approval transaction for external signing.
    async fn build_raw_transaction_approve(&self, params: &ApproveParams)
        -> Result<RawTransaction>;
}
