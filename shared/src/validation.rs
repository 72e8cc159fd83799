//! Input validation functions

/// bcrypt only looks at the first 72 bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Validate a replacement password supplied to the reset flow
pub fn validate_new_password(password: Option<&str>) -> Result<&str, String> {
    let password = match password {
        Some(p) if !p.is_empty() => p,
        _ => return Err("New password is required".to_string()),
    };
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(format!(
            "New password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        ));
    }
    Ok(password)
}
