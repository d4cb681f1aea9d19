//! Domain Error Types
//!
//! Wallet and registry errors. All of them are recoverable and left to the
//! caller to handle.

use rust_decimal::Decimal;
use thiserror::Error;

use super::AmountError;

/// Errors raised by wallet operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Amount is zero, negative, or otherwise not a valid amount
    #[error("invalid amount: {0}")]
    InvalidAmount(AmountError),

    /// Balance does not cover the requested amount
    #[error("wallet has insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },

    /// Send was called without a destination wallet
    #[error("destination wallet is not valid")]
    InvalidDestination,

    /// The destination refused the deposit during a send
    #[error("transaction is not valid")]
    TransactionFailed,

    /// Deposit would push the balance past the maximum
    #[error("deposit would exceed the maximum wallet balance")]
    BalanceOverflow,
}

impl WalletError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(required: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            required,
            available,
        }
    }
}

impl From<AmountError> for WalletError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::Overflow => Self::BalanceOverflow,
            other => Self::InvalidAmount(other),
        }
    }
}

/// Errors raised by the user store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user is registered already: {0}")]
    UserAlreadyRegistered(String),

    #[error("user does not exist: {0}")]
    UserDoesNotExist(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_funds_error() {
        let err = WalletError::insufficient_funds(dec!(100), dec!(50));

        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("50"));
    }

    #[test]
    fn test_amount_error_conversion() {
        let err: WalletError = AmountError::NotPositive(dec!(-1)).into();
        assert!(matches!(err, WalletError::InvalidAmount(_)));

        let err: WalletError = AmountError::Overflow.into();
        assert_eq!(err, WalletError::BalanceOverflow);
    }

    #[test]
    fn test_store_error_mentions_email() {
        let err = StoreError::UserDoesNotExist("joe@bloggs.com".to_string());
        assert!(err.to_string().contains("joe@bloggs.com"));
    }
}
