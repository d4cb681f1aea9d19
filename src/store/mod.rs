//! Store module
//!
//! In-memory registry of users keyed by email.

mod registry;

pub use registry::UserStore;
