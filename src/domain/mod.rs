//! Domain module
//!
//! Core domain types shared by wallets and the user store.

pub mod amount;
pub mod error;

pub use amount::{Amount, AmountError, Balance};
pub use error::{StoreError, WalletError};
