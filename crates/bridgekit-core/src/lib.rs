//! # Bridgekit Core
//!
//! Shared building blocks for the Bridgekit multi-chain bridge SDK: the chain
//! registry (symbols, chain types, decimal precision), SDK configuration, the
//! core bridge API client, amount conversion, and the polymorphic
//! [`TokenService`](token_service::TokenService) contract that every per-chain
//! adapter implements.
//!
//! Chain adapters live in their own crates (e.g. `bridgekit-stellar`) and pull
//! their collaborators from here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod chains;
pub mod client;
pub mod config;
pub mod token_service;

pub use bridgekit_error::{Result, SdkError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::amount::convert_float_amount_to_int;
    pub use crate::chains::{chain_property, ChainProperty, ChainSymbol, ChainType};
    pub use crate::client::CoreApiClient;
    pub use crate::config::{NodeRpcUrls, SdkOptions};
    pub use crate::token_service::{
        GetNativeTokenBalanceParams, GetTokenBalanceParams, RawTransaction, Token, TokenService,
        TransactionResponse,
    };
    pub use bridgekit_error::{Result, SdkError};
}
