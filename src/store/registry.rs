//! User Store
//!
//! Maps emails to registered users. Users are only ever added; there is no
//! update or removal. The store is an owned value: construct one at startup
//! and pass it by reference to whatever needs it.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::StoreError;
use crate::ledger::User;

/// Registry of users keyed by email
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, Arc<User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user with a zero-balance wallet.
    ///
    /// Returns `UserAlreadyRegistered` if the email is already taken; the
    /// existing entry is left untouched.
    pub fn register_user(&self, email: &str, name: &str) -> Result<Arc<User>, StoreError> {
        let mut users = self.users.write();

        match users.entry(email.to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!(email, "Rejected duplicate registration");
                Err(StoreError::UserAlreadyRegistered(email.to_string()))
            }
            Entry::Vacant(slot) => {
                let user = Arc::new(User::new(email, name));
                slot.insert(Arc::clone(&user));

                tracing::info!(email, name, wallet_id = %user.wallet_id(), "Registered user");
                Ok(user)
            }
        }
    }

    /// Look up a registered user by email.
    ///
    /// The returned handle shares the live wallet with every other handle to
    /// the same user.
    pub fn get_user(&self, email: &str) -> Result<Arc<User>, StoreError> {
        self.users
            .read()
            .get(email)
            .cloned()
            .ok_or_else(|| StoreError::UserDoesNotExist(email.to_string()))
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}
