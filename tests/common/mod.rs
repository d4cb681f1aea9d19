//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use wallet_ledger::{User, UserStore};

/// Tolerance used when comparing balances as floating point
pub const EPSILON: f64 = 1e-8;

/// Register a user and fund its wallet
pub fn register_funded(store: &UserStore, email: &str, name: &str, balance: Decimal) -> Arc<User> {
    let user = store.register_user(email, name).expect("Failed to register user");
    if balance > Decimal::ZERO {
        user.deposit_into_wallet(balance)
            .expect("Failed to fund wallet");
    }
    user
}

/// Assert a balance within EPSILON of the expected float value
pub fn assert_balance_near(user: &User, expected: f64) {
    let actual = user
        .check_wallet_balance()
        .to_f64()
        .expect("Balance not representable as f64");
    assert!(
        (actual - expected).abs() <= EPSILON,
        "balance of {}: want {}, got {}",
        user.email(),
        expected,
        actual
    );
}
