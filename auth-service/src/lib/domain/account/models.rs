use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::LoginError;

/// Stored credential record.
///
/// Carries the login and the salted password hash, never a plaintext
/// password. Immutable after creation; there is no update or delete.
#[derive(Debug, Clone)]
pub struct Account {
    pub login: Login,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(login: Login, password_hash: String) -> Self {
        Self {
            login,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Login value type
///
/// Ensures the login is 3-32 characters of alphanumerics, underscore, and
/// hyphen. Comparison is exact; there is no case folding anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Login(String);

impl Login {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 32;

    /// Create a new valid login.
    ///
    /// # Errors
    /// * `TooShort` - login shorter than 3 characters
    /// * `TooLong` - login longer than 32 characters
    /// * `InvalidCharacters` - contains characters outside alphanumeric,
    ///   underscore, and hyphen
    pub fn new(login: String) -> Result<Self, LoginError> {
        let login = Self::with_valid_length(login)?;
        let login = Self::with_valid_chars(login)?;
        Ok(Self(login))
    }

    fn with_valid_length(login: String) -> Result<String, LoginError> {
        let length = login.len();
        if length < Self::MIN_LENGTH {
            Err(LoginError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(login)
        }
    }

    fn with_valid_chars(login: String) -> Result<String, LoginError> {
        if login
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            Ok(login)
        } else {
            Err(LoginError::InvalidCharacters)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity asserted by a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub login: Login,
    pub expires_at: DateTime<Utc>,
}
