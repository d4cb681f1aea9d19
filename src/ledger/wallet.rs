//! Wallet
//!
//! A wallet holds a balance and applies deposits, withdrawals and sends to it.
//! Every operation validates before it mutates, so a balance never goes negative.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Amount, Balance, WalletError};

/// Handler invoked by [`Wallet::observe`] with the wallet id and its current balance.
pub type BalanceHandler<'a> = &'a mut dyn FnMut(Uuid, &Balance);

/// Wallet
///
/// Owned by exactly one user. Not `Clone`: a wallet id identifies one live balance.
#[derive(Debug, Serialize)]
pub struct Wallet {
    /// Unique wallet ID
    id: Uuid,

    /// Current balance
    balance: Balance,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl Wallet {
    /// Create a new wallet with a fresh id and a zero balance
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            balance: Balance::zero(),
        }
    }

    /// Create a new wallet with a fresh id and the given opening balance
    pub fn with_balance(balance: Decimal) -> Result<Self, WalletError> {
        Ok(Self {
            id: Uuid::new_v4(),
            balance: Balance::new(balance)?,
        })
    }

    // =========================================================================
    // Wallet::deposit()
    // =========================================================================

    /// Add the amount to the balance.
    ///
    /// Rejects non-positive amounts with `InvalidAmount` and deposits that would
    /// exceed the maximum balance with `BalanceOverflow`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let amount = Amount::new(amount).map_err(WalletError::InvalidAmount)?;

        self.balance = self.balance.credit(&amount)?;

        tracing::debug!(wallet_id = %self.id, %amount, balance = %self.balance, "Deposited");
        Ok(())
    }

    // =========================================================================
    // Wallet::withdraw()
    // =========================================================================

    /// Remove the amount from the balance.
    ///
    /// Rejects non-positive amounts with `InvalidAmount` and amounts above the
    /// current balance with `InsufficientFunds`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), WalletError> {
        let amount = self.validate_debit(amount)?;

        self.balance = self.balance.debit(&amount)?;

        tracing::debug!(wallet_id = %self.id, %amount, balance = %self.balance, "Withdrew");
        Ok(())
    }

    // =========================================================================
    // Wallet::send()
    // =========================================================================

    /// Send the amount to the destination wallet.
    ///
    /// Checks, in order: the amount is valid, the balance covers it, and a
    /// destination is present. The amount is then deposited into the
    /// destination; if that deposit fails for any reason the send fails with
    /// `TransactionFailed` and neither balance changes. The source is debited
    /// only after the destination deposit succeeded.
    pub fn send(
        &mut self,
        destination: Option<&mut Wallet>,
        amount: Decimal,
    ) -> Result<(), WalletError> {
        let amount = self.validate_debit(amount)?;

        let destination = destination.ok_or(WalletError::InvalidDestination)?;

        if let Err(e) = destination.deposit(amount.value()) {
            tracing::warn!(
                from = %self.id,
                to = %destination.id,
                %amount,
                "Destination refused deposit: {}",
                e
            );
            return Err(WalletError::TransactionFailed);
        }

        self.balance = self.balance.debit(&amount)?;

        tracing::info!(from = %self.id, to = %destination.id, %amount, "Sent");
        Ok(())
    }

    /// Check that the amount is valid and covered by the current balance
    pub(crate) fn validate_debit(&self, amount: Decimal) -> Result<Amount, WalletError> {
        let amount = Amount::new(amount).map_err(WalletError::InvalidAmount)?;

        if !self.balance.is_sufficient_for(&amount) {
            return Err(WalletError::insufficient_funds(
                amount.value(),
                self.balance.value(),
            ));
        }

        Ok(amount)
    }

    /// Current balance of the wallet
    pub fn check_balance(&self) -> Decimal {
        self.balance.value()
    }

    /// Hand the wallet id and current balance to the handler, if one is given
    pub fn observe(&self, handler: Option<BalanceHandler<'_>>) {
        if let Some(handler) = handler {
            handler(self.id, &self.balance);
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }
}
