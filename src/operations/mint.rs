// NFT Mint Operation
// This module contains the mint operation logic.

use crate::error::{NftError, NftResult};
use crate::types::{Address, Token};

use super::validation::validate_recipient;

/// Mint one unit of a token to a recipient
///
/// Atomically increments the recipient balance and the `minted` counter;
/// a rejected call leaves the record untouched.
///
/// # Parameters
/// - `token`: Token record to mint on
/// - `to`: Recipient address
///
/// # Returns
/// - `Ok(u64)`: The recipient's new balance
/// - `Err(NftError)`: Error code
pub fn mint(token: &mut Token, to: &Address) -> NftResult<u64> {
    // Step 1: Input validation
    validate_recipient(to)?;

    // Step 2: Ceiling check (inclusive: exactly max_mint units may ever exist)
    token.can_mint(1)?;

    // Step 3: Compute the counter update before any write
    let minted = token.minted.checked_add(1).ok_or(NftError::Overflow)?;

    // Step 4: Commit balance and counter together
    let balance = token.credit(to)?;
    token.minted = minted;

    Ok(balance)
}
