// NFT Input Validation Helpers
// This module provides validation functions for ledger operation inputs.

use crate::error::{NftError, NftResult};
use crate::types::Address;

/// Validate a token owner address (must be non-empty)
pub fn validate_owner_address(address: &Address) -> NftResult<()> {
    if address.is_empty() {
        return Err(NftError::InvalidArgument);
    }
    Ok(())
}

/// Validate a mint/transfer recipient address (must be non-empty)
pub fn validate_recipient(address: &Address) -> NftResult<()> {
    if address.is_empty() {
        return Err(NftError::InvalidArgument);
    }
    Ok(())
}

/// Validate a mint ceiling.
/// Creation itself counts as the first mint, so a ceiling must admit at
/// least one unit.
pub fn validate_max_mint(max_mint: Option<u64>) -> NftResult<()> {
    if max_mint == Some(0) {
        return Err(NftError::InvalidArgument);
    }
    Ok(())
}
