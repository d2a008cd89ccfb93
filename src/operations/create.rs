// NFT Create Operation
// This module contains the token creation logic.

use indexmap::IndexMap;

use crate::error::NftResult;
use crate::types::{Address, Token, TokenId};

use super::validation::{validate_max_mint, validate_owner_address};

// ========================================
// Create Parameters
// ========================================

/// Parameters for creating a new token
#[derive(Clone, Debug)]
pub struct CreateParams {
    /// Display name
    pub name: String,
    /// Display symbol
    pub symbol: String,
    /// Opaque metadata blob (may be empty)
    pub metadata: String,
    /// Creating address; receives the first unit
    pub owner: Address,
    /// Lifetime mint ceiling (None = unlimited, Some(n) requires n >= 1)
    pub max_mint: Option<u64>,
}

impl CreateParams {
    /// Create new token parameters
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, owner: Address) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            metadata: String::new(),
            owner,
            max_mint: None,
        }
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = metadata.into();
        self
    }

    /// Set the mint ceiling
    pub fn with_max_mint(mut self, max_mint: u64) -> Self {
        self.max_mint = Some(max_mint);
        self
    }

    /// Validate all parameters
    pub fn validate(&self) -> NftResult<()> {
        validate_owner_address(&self.owner)?;
        validate_max_mint(self.max_mint)?;
        Ok(())
    }
}

// ========================================
// Create Operation
// ========================================

/// Create a new token record
///
/// Creation seeds one unit to the owner and counts as the first mint, so
/// a ceiling of 1 produces a token that can never be minted again.
///
/// # Parameters
/// - `id`: Ledger-allocated token id
/// - `params`: Creation parameters
///
/// # Returns
/// - `Ok(Token)`: The new token record
/// - `Err(NftError)`: Error code
pub fn create(id: TokenId, params: CreateParams) -> NftResult<Token> {
    // Step 1: Validate parameters
    params.validate()?;

    // Step 2: Seed the balance table with the creation unit
    let mut balances = IndexMap::new();
    balances.insert(params.owner.clone(), 1);

    // Step 3: Build the record
    let token = Token {
        id,
        name: params.name,
        symbol: params.symbol,
        metadata: params.metadata,
        creator: params.owner,
        max_mint: params.max_mint,
        minted: 1,
        burned: 0,
        balances,
    };

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NftError;

    fn test_id() -> TokenId {
        TokenId::new([1u8; 32])
    }

    #[test]
    fn test_create_success() {
        let owner = Address::from("eth://sendmemoney");
        let params = CreateParams::new("SymNyan", "~=[,,_,,]:3", owner.clone());

        let token = create(test_id(), params).unwrap();
        assert_eq!(token.id, test_id());
        assert_eq!(token.name, "SymNyan");
        assert_eq!(token.symbol, "~=[,,_,,]:3");
        assert_eq!(token.creator, owner);
        assert_eq!(token.minted, 1);
        assert_eq!(token.burned, 0);
        assert_eq!(token.max_mint, None);
        assert_eq!(token.balance_of(&owner), 1);
        assert_eq!(token.balances.len(), 1);
    }

    #[test]
    fn test_create_empty_owner_fails() {
        let params = CreateParams::new("Test", "TST", Address::from(""));
        assert_eq!(create(test_id(), params), Err(NftError::InvalidArgument));
    }

    #[test]
    fn test_create_zero_ceiling_fails() {
        let params = CreateParams::new("Test", "TST", Address::from("alice")).with_max_mint(0);
        assert_eq!(create(test_id(), params), Err(NftError::InvalidArgument));
    }

    #[test]
    fn test_create_ceiling_of_one_is_valid() {
        let params = CreateParams::new("Test", "TST", Address::from("alice")).with_max_mint(1);
        let token = create(test_id(), params).unwrap();

        // The creation unit consumed the whole ceiling
        assert_eq!(token.minted, 1);
        assert_eq!(token.max_mint, Some(1));
        assert_eq!(token.can_mint(1), Err(NftError::MintCeilingExceeded));
    }

    #[test]
    fn test_create_metadata_stored_verbatim() {
        let payload = r#"{"hello":"world"}"#;
        let params =
            CreateParams::new("Test", "TST", Address::from("alice")).with_metadata(payload);

        let token = create(test_id(), params).unwrap();
        assert_eq!(token.metadata, payload);
    }
}
