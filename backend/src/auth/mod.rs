//! Authentication module
//!
//! Provides bcrypt password hashing, JWT session tokens and the admin code
//! that gates password resets.

mod admin_code;
mod jwt;
mod password;

pub use admin_code::AdminCode;
pub use jwt::{Claims, JwtKeys, TokenError, TokenIssuer};
pub use password::{PasswordError, PasswordService};
