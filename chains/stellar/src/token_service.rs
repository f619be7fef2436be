//! Token service for the Stellar/Soroban chain family.

use crate::horizon::HorizonClient;
use async_trait::async_trait;
use bridgekit_core::amount::convert_float_amount_to_int;
use bridgekit_core::chains::{chain_property, ChainSymbol, ChainType};
use bridgekit_core::client::CoreApiClient;
use bridgekit_core::config::{NodeRpcUrls, SdkOptions};
use bridgekit_core::token_service::{
    ApproveParams, GetNativeTokenBalanceParams, GetTokenBalanceParams, RawTransaction,
    TokenService, TransactionResponse,
};
use bridgekit_error::{Result, SdkError};
use std::sync::Arc;
use tracing::debug;

/// Token service for the SRB chain family.
///
/// Bridged SRB assets settle on the Stellar ledger, so every query resolves
/// the [`ChainSymbol::Stlr`] Horizon endpoint and opens an ephemeral client
/// against it. This family has no allowance model: the approval surface
/// always fails with [`SdkError::MethodNotSupported`].
#[derive(Debug)]
pub struct SrbTokenService {
    node_rpc_urls: NodeRpcUrls,
    #[allow(dead_code)]
    params: SdkOptions,
    #[allow(dead_code)]
    api: Arc<CoreApiClient>,
}

impl SrbTokenService {
    /// Creates the service from SDK-wide configuration.
    pub fn new(node_rpc_urls: NodeRpcUrls, params: SdkOptions, api: Arc<CoreApiClient>) -> Self {
        Self { node_rpc_urls, params, api }
    }

    fn horizon(&self) -> Result<HorizonClient> {
        let url = self.node_rpc_urls.get_node_rpc_url(ChainSymbol::Stlr)?;
        HorizonClient::new(url)
    }
}

/// Splits an origin token address `"assetCode:issuerAddress"` into its parts.
fn parse_origin_token_address(origin: &str) -> Result<(&str, &str)> {
    let mut parts = origin.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(code), Some(issuer), None) => Ok((code, issuer)),
        _ => Err(SdkError::config(format!(
            "malformed origin token address: {origin}"
        ))),
    }
}

#[async_trait]
impl TokenService for SrbTokenService {
    fn chain_type(&self) -> ChainType {
        ChainType::Srb
    }

    async fn get_token_balance(&self, params: &GetTokenBalanceParams) -> Result<String> {
        let origin = params
            .token
            .origin_token_address
            .as_deref()
            .ok_or_else(|| SdkError::config("origin token address missing"))?;
        let (symbol, issuer) = parse_origin_token_address(origin)?;

        let account = match self.horizon()?.load_account(&params.account).await {
            Ok(account) => account,
            // A missing account is an ordinary zero-balance state here.
            Err(err) if err.is_account_not_found() => return Ok("0".to_string()),
            Err(err) => return Err(err),
        };

        let balance = account
            .balances
            .iter()
            .filter_map(|line| line.as_credit())
            .find(|(_, code, line_issuer)| *code == symbol && *line_issuer == issuer)
            .map(|(balance, _, _)| balance);

        match balance {
            Some(balance) if !balance.is_empty() => {
                debug!(account = %params.account, symbol, "found trustline balance");
                let decimals = chain_property(params.token.chain_symbol).chain_type.decimals();
                convert_float_amount_to_int(balance, decimals)
            }
            _ => Ok("0".to_string()),
        }
    }

    async fn get_native_token_balance(
        &self,
        params: &GetNativeTokenBalanceParams,
    ) -> Result<String> {
        // No account-not-found handling here: a missing account propagates.
        let account = self.horizon()?.load_account(&params.account).await?;

        let balance = account.balances.iter().find_map(|line| line.as_native());

        match balance {
            Some(balance) if !balance.is_empty() => {
                let decimals = chain_property(params.chain_symbol).chain_type.decimals();
                convert_float_amount_to_int(balance, decimals)
            }
            _ => Ok("0".to_string()),
        }
    }

    async fn get_allowance(&self, _params: &ApproveParams) -> Result<String> {
        Err(SdkError::MethodNotSupported)
    }

    async fn approve(&self, _params: &ApproveParams) -> Result<TransactionResponse> {
        Err(SdkError::MethodNotSupported)
    }

    async fn build_raw_transaction_approve(
        &self,
        _params: &ApproveParams,
    ) -> Result<RawTransaction> {
        Err(SdkError::MethodNotSupported)
    }
}
