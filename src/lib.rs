//! wallet_ledger Library
//!
//! Users own wallets; wallets take deposits, withdrawals and transfers; a
//! user store registers and looks up users by email.

pub mod config;
pub mod domain;
pub mod ledger;
pub mod seed;
pub mod store;

mod error;

pub use config::Config;
pub use domain::{Amount, AmountError, Balance, StoreError, WalletError};
pub use error::{AppError, AppResult};
pub use ledger::{User, Wallet};
pub use store::UserStore;
