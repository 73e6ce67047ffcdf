use auth_core::PasswordError;
use auth_core::TokenError;
use thiserror::Error;

/// Error for Login validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Login too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Login too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Login contains invalid characters (only alphanumeric, underscore, and hyphen allowed)")]
    InvalidCharacters,
}

/// Top-level error for all authentication operations.
///
/// The variants stay distinguishable here so the cause can be logged and
/// asserted on; the HTTP layer collapses the client-attributable ones into
/// a uniform unauthorized response.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Login already exists: {0}")]
    LoginAlreadyExists(String),

    #[error("Account store is read-only")]
    ReadOnlyStore,

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}
