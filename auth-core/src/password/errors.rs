use thiserror::Error;

/// Error type for password operations.
///
/// Both variants are system-level faults. A wrong password is not an
/// error here; `verify` reports it as `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
