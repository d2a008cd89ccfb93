// NFT Transfer Operation
// This module contains the transfer operation logic.

use crate::error::{NftError, NftResult};
use crate::types::{Address, Token};

use super::validation::validate_recipient;

/// Transfer one unit of a token between two addresses
///
/// Atomically debits the source and credits the destination; `minted` and
/// `burned` are unaffected. A self-transfer is a legal identity operation
/// (it still requires the source to hold a unit).
///
/// # Parameters
/// - `token`: Token record to transfer on
/// - `from`: Source address
/// - `to`: Destination address
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(NftError)`: Error code
pub fn transfer(token: &mut Token, from: &Address, to: &Address) -> NftResult<()> {
    // Step 1: Input validation
    validate_recipient(to)?;

    // Step 2: Source must hold at least one unit
    if token.balance_of(from) == 0 {
        return Err(NftError::InsufficientBalance);
    }

    // Step 3: Self-transfer is an identity operation
    if from == to {
        return Ok(());
    }

    // Step 4: Compute the destination balance before the debit so a
    // failure cannot leave a half-moved unit
    let credited = token
        .balance_of(to)
        .checked_add(1)
        .ok_or(NftError::Overflow)?;
    token.debit(from)?;
    token.balances.insert(to.clone(), credited);

    Ok(())
}
