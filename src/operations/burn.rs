// NFT Burn Operation
// This module contains the burn operation logic.

use crate::error::{NftError, NftResult};
use crate::types::{Address, Token};

/// Burn one unit of a token from a holder
///
/// Decrements the holder balance and increments the `burned` counter.
/// `minted` is unaffected: burned units stay counted against the ceiling,
/// so headroom under `max_mint` is never reclaimed.
///
/// # Parameters
/// - `token`: Token record to burn on
/// - `from`: Holder address to debit
///
/// # Returns
/// - `Ok(u64)`: The holder's new balance
/// - `Err(NftError)`: Error code
pub fn burn(token: &mut Token, from: &Address) -> NftResult<u64> {
    // Step 1: Compute the counter update before any write
    let burned = token.burned.checked_add(1).ok_or(NftError::Overflow)?;

    // Step 2: Debit the holder (rejects a zero or unknown balance)
    let balance = token.debit(from)?;
    token.burned = burned;

    Ok(balance)
}

#[cfg(test)]
mod tests {
    use super::super::create::{create, CreateParams};
    use super::super::mint::mint;
    use super::*;
    use crate::types::TokenId;

    fn setup_token(max_mint: Option<u64>) -> (Token, Address) {
        let owner = Address::from("eth://sendmemoney");
        let mut params = CreateParams::new("SymNyan v3", "~=[,,,,_,,,,]:3", owner.clone());
        params.max_mint = max_mint;
        let token = create(TokenId::new([3u8; 32]), params).unwrap();
        (token, owner)
    }

    #[test]
    fn test_burn_success() {
        let (mut token, owner) = setup_token(None);

        let balance = burn(&mut token, &owner).unwrap();
        assert_eq!(balance, 0);
        assert_eq!(token.burned, 1);
        assert_eq!(token.balance_of(&owner), 0);

        // The holder stays visible at 0
        assert_eq!(token.balances.get(&owner), Some(&0));
    }

    #[test]
    fn test_burn_leaves_minted_untouched() {
        let (mut token, owner) = setup_token(None);

        burn(&mut token, &owner).unwrap();
        assert_eq!(token.minted, 1);
        assert_eq!(token.circulating(), 0);
    }

    #[test]
    fn test_burn_zero_balance_fails_without_changes() {
        let (mut token, owner) = setup_token(None);
        burn(&mut token, &owner).unwrap();
        let before = token.clone();

        let result = burn(&mut token, &owner);
        assert_eq!(result, Err(NftError::InsufficientBalance));
        assert_eq!(token, before);
    }

    #[test]
    fn test_burn_unknown_address_fails() {
        let (mut token, _) = setup_token(None);

        let result = burn(&mut token, &Address::from("eth://nobody"));
        assert_eq!(result, Err(NftError::InsufficientBalance));
        assert_eq!(token.burned, 0);
    }

    #[test]
    fn test_burn_does_not_release_ceiling() {
        let (mut token, owner) = setup_token(Some(1));

        burn(&mut token, &owner).unwrap();
        assert_eq!(token.balance_of(&owner), 0);

        // The burned unit still counts against the ceiling
        let result = mint(&mut token, &owner);
        assert_eq!(result, Err(NftError::MintCeilingExceeded));
        assert_eq!(token.minted, 1);
    }
}
