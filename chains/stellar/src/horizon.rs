//! Minimal Horizon ledger client.
//!
//! Covers the one endpoint the token service needs: load an account by id and
//! read its balance lines. HTTP 404 on the account lookup is surfaced as
//! [`SdkError::AccountNotFound`] so callers can tell a missing account apart
//! from a connectivity or protocol failure, which propagate as-is.

use bridgekit_error::{Result, SdkError};
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// A single entry in an account's balance list, tagged by asset type.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "asset_type")]
pub enum BalanceLine {
    /// The ledger's built-in currency (lumens)
    #[serde(rename = "native")]
    Native {
        /// Decimal-string balance
        balance: String,
    },
    /// Issuer-backed asset with a 1-4 character code
    #[serde(rename = "credit_alphanum4")]
    CreditAlphanum4 {
        /// Decimal-string balance
        balance: String,
        /// Asset code
        asset_code: String,
        /// Issuer account id
        asset_issuer: String,
    },
    /// Issuer-backed asset with a 5-12 character code
    #[serde(rename = "credit_alphanum12")]
    CreditAlphanum12 {
        /// Decimal-string balance
        balance: String,
        /// Asset code
        asset_code: String,
        /// Issuer account id
        asset_issuer: String,
    },
    /// Liquidity pool shares; never a bridgeable asset
    #[serde(rename = "liquidity_pool_shares")]
    LiquidityPoolShares {
        /// Decimal-string balance
        balance: String,
    },
}

impl BalanceLine {
    /// Returns `(balance, code, issuer)` if this line is a credit asset.
    pub fn as_credit(&self) -> Option<(&str, &str, &str)> {
        match self {
            BalanceLine::CreditAlphanum4 { balance, asset_code, asset_issuer }
            | BalanceLine::CreditAlphanum12 { balance, asset_code, asset_issuer } => {
                Some((balance, asset_code, asset_issuer))
            }
            _ => None,
        }
    }

    /// Returns the balance if this line is the native asset.
    pub fn as_native(&self) -> Option<&str> {
        match self {
            BalanceLine::Native { balance } => Some(balance),
            _ => None,
        }
    }
}

/// An account record as returned by Horizon, reduced to what the SDK reads.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    /// The account id
    pub account_id: String,
    /// All balance lines held by the account
    pub balances: Vec<BalanceLine>,
}

/// A connector for one Horizon endpoint.
///
/// Construction is cheap; the token service builds a fresh client per query.
#[derive(Debug)]
pub struct HorizonClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HorizonClient {
    /// Creates a client against the given Horizon base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url, http: reqwest::Client::new() })
    }

    /// Loads an account by id.
    ///
    /// Returns [`SdkError::AccountNotFound`] if the ledger has no such
    /// account; any other non-success status or decode failure is an error in
    /// its own right.
    pub async fn load_account(&self, account_id: &str) -> Result<AccountRecord> {
        let url = self.base_url.join(&format!("accounts/{account_id}"))?;
        debug!(%url, "loading account from horizon");
        let response = self.http.get(url.clone()).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(SdkError::AccountNotFound(account_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(SdkError::RpcRequestFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        let account = response
            .json::<AccountRecord>()
            .await
            .map_err(|e| SdkError::MalformedResponse(e.to_string()))?;
        Ok(account)
    }
}
