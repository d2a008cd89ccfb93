// NFT Ledger - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Registry errors
// - 100-199: Input validation errors
// - 200-299: Supply and balance errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type NftResult<T> = Result<T, NftError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum NftError {
    // ========================================
    // Registry errors (1-99)
    // ========================================
    #[error("Token not found")]
    NotFound = 1,

    // ========================================
    // Input validation errors (100-199)
    // ========================================
    #[error("Invalid argument")]
    InvalidArgument = 100,

    // ========================================
    // Supply and balance errors (200-299)
    // ========================================
    #[error("Mint ceiling exceeded")]
    MintCeilingExceeded = 200,

    #[error("Insufficient balance")]
    InsufficientBalance = 201,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,
}

impl NftError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::NotFound),
            100 => Some(Self::InvalidArgument),
            200 => Some(Self::MintCeilingExceeded),
            201 => Some(Self::InsufficientBalance),
            900 => Some(Self::Overflow),
            _ => None,
        }
    }
}

/// Convert NftError to error code for host boundary reporting
impl From<NftError> for u64 {
    fn from(err: NftError) -> u64 {
        err.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_unique() {
        let codes = [
            NftError::NotFound,
            NftError::InvalidArgument,
            NftError::MintCeilingExceeded,
            NftError::InsufficientBalance,
            NftError::Overflow,
        ];

        let mut seen = std::collections::HashSet::new();
        for err in codes {
            let code = err.code();
            assert!(
                seen.insert(code),
                "Duplicate error code: {} for {:?}",
                code,
                err
            );
        }
    }

    #[test]
    fn test_error_code_roundtrip() {
        let err = NftError::MintCeilingExceeded;
        let code = err.code();
        let recovered = NftError::from_code(code);
        assert_eq!(recovered, Some(err));
    }

    #[test]
    fn test_unknown_error_code() {
        assert_eq!(NftError::from_code(9999), None);
    }
}
