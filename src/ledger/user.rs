//! User
//!
//! A user owns exactly one wallet and delegates every financial operation to it.
//! The wallet sits behind a mutex so a user can be shared across threads.

use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use crate::domain::WalletError;

use super::wallet::{BalanceHandler, Wallet};

/// User
///
/// Identity (email, name) is fixed at creation; only the wallet balance changes.
#[derive(Debug)]
pub struct User {
    /// Email (unique within a store)
    email: String,

    /// Display name
    name: String,

    /// Id of the owned wallet, kept outside the lock for transfer ordering
    wallet_id: Uuid,

    /// Owned wallet
    wallet: Mutex<Wallet>,
}

impl User {
    /// Create a user with a fresh zero-balance wallet
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_wallet(email, name, Wallet::new())
    }

    /// Create a user owning the given wallet
    pub fn with_wallet(email: impl Into<String>, name: impl Into<String>, wallet: Wallet) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            wallet_id: wallet.id(),
            wallet: Mutex::new(wallet),
        }
    }

    pub fn deposit_into_wallet(&self, amount: Decimal) -> Result<(), WalletError> {
        self.wallet.lock().deposit(amount)
    }

    pub fn withdraw_from_wallet(&self, amount: Decimal) -> Result<(), WalletError> {
        self.wallet.lock().withdraw(amount)
    }

    /// Send the amount from this user's wallet to the target's wallet.
    ///
    /// Both wallets are locked for the whole check, deposit and debit sequence,
    /// always in ascending wallet id order so that opposing transfers cannot
    /// deadlock. Sending to oneself runs the same checks, including the
    /// destination deposit cap, and leaves the balance as it was.
    pub fn send_to(&self, target: &User, amount: Decimal) -> Result<(), WalletError> {
        if self.wallet_id == target.wallet_id {
            let wallet = self.wallet.lock();
            let amount = wallet.validate_debit(amount)?;
            wallet
                .balance()
                .credit(&amount)
                .map_err(|_| WalletError::TransactionFailed)?;
            return Ok(());
        }

        let (mut source, mut destination) = if self.wallet_id < target.wallet_id {
            let source = self.wallet.lock();
            let destination = target.wallet.lock();
            (source, destination)
        } else {
            let destination = target.wallet.lock();
            let source = self.wallet.lock();
            (source, destination)
        };

        source.send(Some(&mut *destination), amount)
    }

    pub fn check_wallet_balance(&self) -> Decimal {
        self.wallet.lock().check_balance()
    }

    /// Pass the wallet id and balance to the handler.
    ///
    /// The lock is released before the handler runs, so the handler may call
    /// back into this user.
    pub fn observe_wallet(&self, handler: Option<BalanceHandler<'_>>) {
        let (id, balance) = {
            let wallet = self.wallet.lock();
            (wallet.id(), *wallet.balance())
        };

        if let Some(handler) = handler {
            handler(id, &balance);
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wallet_id(&self) -> Uuid {
        self.wallet_id
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wallet = self.wallet.lock();

        let mut state = serializer.serialize_struct("User", 3)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("wallet", &*wallet)?;
        state.end()
    }
}
