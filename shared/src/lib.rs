//! Auth Gate Shared Library
//!
//! Wire types, error taxonomy and input validation shared between the
//! backend and any client that talks to it.

pub mod errors;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
