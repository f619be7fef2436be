//! Chain registry: symbols, chain families, and decimal precision.
//!
//! Every bridgeable chain is identified by a [`ChainSymbol`]; chains that share
//! an execution model share a [`ChainType`]. The native decimal precision used
//! for amount conversion is a property of the chain type, not the individual
//! chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a single supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChainSymbol {
    /// Ethereum
    Eth,
    /// Polygon
    Pol,
    /// Tron
    Trx,
    /// Solana
    Sol,
    /// Stellar (classic ledger; hosts the Horizon endpoint)
    Stlr,
    /// Soroban (Stellar smart-contract chain; bridged assets settle on the
    /// Stellar ledger, so balance queries go through [`ChainSymbol::Stlr`])
    Srb,
}

impl ChainSymbol {
    /// The chain family this chain belongs to.
    pub fn chain_type(&self) -> ChainType {
        match self {
            ChainSymbol::Eth | ChainSymbol::Pol => ChainType::Evm,
            ChainSymbol::Trx => ChainType::Trx,
            ChainSymbol::Sol => ChainType::Solana,
            ChainSymbol::Stlr | ChainSymbol::Srb => ChainType::Srb,
        }
    }
}

impl fmt::Display for ChainSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChainSymbol::Eth => "ETH",
            ChainSymbol::Pol => "POL",
            ChainSymbol::Trx => "TRX",
            ChainSymbol::Sol => "SOL",
            ChainSymbol::Stlr => "STLR",
            ChainSymbol::Srb => "SRB",
        };
        write!(f, "{s}")
    }
}

/// A chain family: chains sharing an execution and account model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChainType {
    /// EVM-compatible chains
    Evm,
    /// Tron
    Trx,
    /// Solana
    Solana,
    /// Stellar/Soroban
    Srb,
}

impl ChainType {
    /// Native decimal precision used to scale human-readable amounts into the
    /// smallest indivisible unit on this chain family.
    pub fn decimals(&self) -> u8 {
        match self {
            ChainType::Evm => 18,
            ChainType::Trx => 6,
            ChainType::Solana => 9,
            ChainType::Srb => 7,
        }
    }
}

/// Static properties of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainProperty {
    /// The chain's family
    pub chain_type: ChainType,
    /// Human-readable chain name
    pub name: &'static str,
}

/// Looks up the static properties of a chain.
pub fn chain_property(symbol: ChainSymbol) -> ChainProperty {
    match symbol {
        ChainSymbol::Eth => ChainProperty { chain_type: ChainType::Evm, name: "Ethereum" },
        ChainSymbol::Pol => ChainProperty { chain_type: ChainType::Evm, name: "Polygon" },
        ChainSymbol::Trx => ChainProperty { chain_type: ChainType::Trx, name: "Tron" },
        ChainSymbol::Sol => ChainProperty { chain_type: ChainType::Solana, name: "Solana" },
        ChainSymbol::Stlr => ChainProperty { chain_type: ChainType::Srb, name: "Stellar" },
        ChainSymbol::Srb => ChainProperty { chain_type: ChainType::Srb, name: "Soroban" },
    }
}
