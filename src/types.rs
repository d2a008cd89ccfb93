// NFT Ledger - Core Types
// This module defines all data structures for ledger operations.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NftError, NftResult};

// ========================================
// Address
// ========================================

/// Opaque balance holder identity.
///
/// Addresses are free-form strings supplied by the host layer (observed
/// formats include URI-like scheme prefixes); the ledger never parses or
/// validates their structure beyond requiring owners to be non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Create an address from any string-like value
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========================================
// Token Id
// ========================================

/// Token identifier (ledger-generated at creation)
///
/// A 32-byte content hash, rendered as lowercase hex at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(#[serde(with = "hex::serde")] [u8; 32]);

impl TokenId {
    pub const SIZE: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse a token id from its hex rendering
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        use hex::FromHex;
        Ok(Self(<[u8; 32]>::from_hex(hex)?))
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// ========================================
// Token
// ========================================

/// One NFT token class tracked by the ledger.
///
/// Minting creates fungible-like copies of the same token id,
/// distinguished only by owner balances. The `minted` counter is
/// monotonic: burns are tracked separately in `burned` and never release
/// ceiling headroom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token ID (ledger-generated at creation)
    pub id: TokenId,

    /// Display name, immutable
    pub name: String,

    /// Display symbol, immutable
    pub symbol: String,

    /// Opaque metadata blob, stored and returned verbatim
    pub metadata: String,

    /// Address that created the token, immutable
    pub creator: Address,

    /// Lifetime ceiling on minted units (None = unlimited)
    pub max_mint: Option<u64>,

    /// Units ever created, creation included; never decremented
    pub minted: u64,

    /// Units ever destroyed
    pub burned: u64,

    /// Per-address quantities, in first-touch order.
    /// A missing key is balance 0; a key once touched stays visible at 0.
    pub balances: IndexMap<Address, u64>,
}

impl Token {
    /// Get the quantity held by an address (0 if never seen)
    pub fn balance_of(&self, address: &Address) -> u64 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Check if more units can be minted under the ceiling
    pub fn can_mint(&self, count: u64) -> NftResult<()> {
        if let Some(max) = self.max_mint {
            let new_minted = self.minted.checked_add(count).ok_or(NftError::Overflow)?;
            if new_minted > max {
                return Err(NftError::MintCeilingExceeded);
            }
        }

        Ok(())
    }

    /// Add one unit to an address, returning the new balance.
    /// The new value is computed before the write so a failure leaves the
    /// record untouched.
    pub fn credit(&mut self, address: &Address) -> NftResult<u64> {
        let balance = self
            .balance_of(address)
            .checked_add(1)
            .ok_or(NftError::Overflow)?;
        self.balances.insert(address.clone(), balance);
        Ok(balance)
    }

    /// Remove one unit from an address, returning the new balance.
    /// The entry is kept at 0 so the address stays visible in the table.
    pub fn debit(&mut self, address: &Address) -> NftResult<u64> {
        match self.balances.get_mut(address) {
            Some(balance) if *balance > 0 => {
                *balance -= 1;
                Ok(*balance)
            }
            _ => Err(NftError::InsufficientBalance),
        }
    }

    /// Units currently in circulation (minted minus burned)
    pub fn circulating(&self) -> u64 {
        self.minted.saturating_sub(self.burned)
    }
}
