//! Amount type
//!
//! Domain primitives for monetary values held in wallets.
//! All amounts are validated at construction time, ensuring invalid values
//! cannot reach a wallet balance.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Maximum allowed balance (1 trillion)
const MAX_BALANCE: i64 = 1_000_000_000_000;

/// Maximum decimal places (8)
const MAX_SCALE: u32 = 8;

fn max_balance() -> Decimal {
    Decimal::new(MAX_BALANCE, 0)
}

/// Amount represents a validated value moved in or out of a wallet.
///
/// # Invariants
/// - Value is always positive (> 0)
/// - Maximum 8 decimal places
/// - Maximum value is 1 trillion
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use wallet_ledger::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(25550, 2)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(25550, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount or moving a Balance
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("amount has too many decimal places (max {MAX_SCALE}, got {0})")]
    TooManyDecimals(u32),

    #[error("value exceeds maximum allowed balance ({MAX_BALANCE})")]
    Overflow,

    #[error("balance cannot be negative (got {0})")]
    Negative(Decimal),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    /// - `AmountError::TooManyDecimals` if more than 8 decimal places
    /// - `AmountError::Overflow` if value > 1 trillion
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        if value.scale() > MAX_SCALE {
            return Err(AmountError::TooManyDecimals(value.scale()));
        }

        if value > max_balance() {
            return Err(AmountError::Overflow);
        }

        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Balance represents the funds held by a wallet.
/// Unlike Amount, Balance can be zero. Not `Deserialize`: every balance goes
/// through `Balance::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Balance(Decimal);

impl Balance {
    /// Create a new balance (zero or positive, at most 1 trillion)
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }

        if value > max_balance() {
            return Err(AmountError::Overflow);
        }

        Ok(Self(value))
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance covers the amount
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance
    pub fn credit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        Balance::new(self.0 + amount.value())
    }

    /// Subtract amount from balance
    pub fn debit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        Balance::new(self.0 - amount.value())
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(dec!(255.50)).unwrap();
        assert_eq!(amount.value(), dec!(255.50));
    }

    #[test]
    fn test_amount_zero_and_negative_rejected() {
        assert!(matches!(
            Amount::new(Decimal::ZERO),
            Err(AmountError::NotPositive(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-0.5)),
            Err(AmountError::NotPositive(_))
        ));
    }

    #[test]
    fn test_amount_too_many_decimals() {
        let amount = Amount::new(Decimal::new(123456789, 9));
        assert!(matches!(amount, Err(AmountError::TooManyDecimals(9))));

        assert!(Amount::new(Decimal::new(12345678, 8)).is_ok());
    }

    #[test]
    fn test_amount_overflow() {
        assert!(matches!(
            Amount::new(dec!(1000000000000.01)),
            Err(AmountError::Overflow)
        ));
        assert!(Amount::new(dec!(1000000000000)).is_ok());
    }

    #[test]
    fn test_display_keeps_full_precision() {
        let amount = Amount::new(dec!(0.001)).unwrap();
        assert_eq!(amount.to_string(), "0.001");

        let balance = Balance::new(dec!(12.34567891)).unwrap();
        assert_eq!(balance.to_string(), "12.34567891");
    }

    #[test]
    fn test_balance_credit_debit() {
        let balance = Balance::zero();

        let balance = balance.credit(&Amount::new(dec!(100)).unwrap()).unwrap();
        assert_eq!(balance.value(), dec!(100));

        let balance = balance.debit(&Amount::new(dec!(30)).unwrap()).unwrap();
        assert_eq!(balance.value(), dec!(70));
    }

    #[test]
    fn test_balance_insufficient() {
        let balance = Balance::new(dec!(50)).unwrap();
        let amount = Amount::new(dec!(100)).unwrap();

        assert!(!balance.is_sufficient_for(&amount));
        assert!(matches!(
            balance.debit(&amount),
            Err(AmountError::Negative(_))
        ));
    }

    #[test]
    fn test_balance_credit_overflow() {
        let balance = Balance::new(dec!(999999999999)).unwrap();
        let amount = Amount::new(dec!(2)).unwrap();

        assert_eq!(balance.credit(&amount), Err(AmountError::Overflow));
    }

    #[test]
    fn test_balance_serializes_as_string() {
        let balance = Balance::new(dec!(153.00)).unwrap();
        let json = serde_json::to_string(&balance).unwrap();
        assert_eq!(json, r#""153.00""#);
    }
}
