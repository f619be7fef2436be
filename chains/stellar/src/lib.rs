//! Stellar/Soroban (SRB) support for the Bridgekit SDK.
//!
//! Ships the [`SrbTokenService`] chain adapter and the minimal Horizon ledger
//! client it queries. Balance queries only: the Stellar family has no
//! allowance concept, so the approval surface of the token service contract
//! always fails with a distinct unsupported-operation error.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod horizon;
mod token_service;

pub use token_service::SrbTokenService;
