//! Seed data
//!
//! Users registered by the demo driver before it runs its scripted operations.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::ledger::User;
use crate::store::UserStore;

/// An (email, name) pair to register
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub name: String,
}

impl SeedUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

const DEFAULT_USERS: [(&str, &str); 20] = [
    ("Martyna@gmail.com", "Martyna Mcdougall"),
    ("Priscilla@gmail.com", "Priscilla Benson"),
    ("Aiza@hotmail.com", "Aiza Mccullough"),
    ("Jorja@hotmail.com", "Jorja Montoya"),
    ("Chelsy@microsoft.com", "Chelsy Maldonado"),
    ("Sumaiyah@microsoft.com", "Sumaiyah Burnett"),
    ("Miya@crypto.com", "Miya Hoover"),
    ("Cruz@crypto.com", "Cruz Mcdaniel"),
    ("Montague@crypto.com", "Montague Stanton"),
    ("Joey@amazon.com", "Joey Nixon"),
    ("Miriam@amazon.com", "Miriam Kelly"),
    ("Amos@amazon.com", "Amos Wilcox"),
    ("Antonina@amazon.com", "Antonina Wheeler"),
    ("Nathan@enterprise.com", "Nathan Dyer"),
    ("Alanah@enterprise.com", "Alanah Khan"),
    ("Tommy@enterprise.com", "Tommy-Lee Irving"),
    ("Clark@starwars.com", "Clark Mathews"),
    ("Kavan@starwars.com", "Kavan Harrison"),
    ("Summer@starwars.com", "Summer-Rose Ward"),
    ("Keith@starwars.com", "Keith Bean"),
];

/// Built-in demo users
pub fn default_users() -> Vec<SeedUser> {
    DEFAULT_USERS
        .iter()
        .map(|(email, name)| SeedUser::new(*email, *name))
        .collect()
}

/// Parse seed users from a JSON array of `{"email", "name"}` objects
pub fn parse_users(json: &str) -> AppResult<Vec<SeedUser>> {
    Ok(serde_json::from_str(json)?)
}

/// Read seed users from a JSON file
pub fn load_users(path: &Path) -> AppResult<Vec<SeedUser>> {
    let json = std::fs::read_to_string(path)?;
    parse_users(&json)
}

/// Register every seed user, stopping at the first failure
pub fn populate(store: &UserStore, users: &[SeedUser]) -> AppResult<Vec<Arc<User>>> {
    users
        .iter()
        .map(|seed| {
            store
                .register_user(&seed.email, &seed.name)
                .map_err(AppError::from)
        })
        .collect()
}
