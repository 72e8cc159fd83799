//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod memory;
pub mod user;

pub use memory::InMemoryUserStore;
pub use user::{UserRecord, UserRepository, UserStore};
