//! Ledger module
//!
//! Wallets and the users that own them.

pub mod user;
pub mod wallet;

pub use user::User;
pub use wallet::{BalanceHandler, Wallet};
