// NFT Ledger - External Serialization Surface
// Boundary views consumed by the host layer. Quantities render as decimal
// strings per the host contract; metadata passes through verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{Address, Token, TokenId};

/// Host-facing rendering of a token record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub id: TokenId,
    pub name: String,
    pub symbol: String,
    /// Opaque metadata blob, byte-identical to the creation payload
    pub metadata: String,
    pub creator: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_mint: Option<u64>,
    pub minted: u64,
    pub burned: u64,
    /// Quantities as decimal strings, e.g. "1"
    pub balances: IndexMap<Address, String>,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id,
            name: token.name.clone(),
            symbol: token.symbol.clone(),
            metadata: token.metadata.clone(),
            creator: token.creator.clone(),
            max_mint: token.max_mint,
            minted: token.minted,
            burned: token.burned,
            balances: token
                .balances
                .iter()
                .map(|(address, quantity)| (address.clone(), quantity.to_string()))
                .collect(),
        }
    }
}

impl From<Token> for TokenView {
    fn from(token: Token) -> Self {
        Self::from(&token)
    }
}

/// Host-facing rendering of a creator lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorView {
    pub address: Address,
}

impl From<&Token> for CreatorView {
    fn from(token: &Token) -> Self {
        Self {
            address: token.creator.clone(),
        }
    }
}
