//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the auth primitives.

pub mod credentials;
pub mod password_reset;

pub use credentials::CredentialService;
pub use password_reset::PasswordResetService;
