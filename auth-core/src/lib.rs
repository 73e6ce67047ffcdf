//! Core authentication building blocks
//!
//! The two leaf components of the authentication service:
//! - Password hashing and verification (Argon2id, salted PHC strings)
//! - Signed, time-bounded bearer tokens (HS256 JWTs)
//!
//! Both are pure and synchronous; storage and orchestration live in the
//! service crate that consumes this one.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth_core::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```
//!
//! ## Token lifecycle
//! ```
//! use auth_core::TokenProvider;
//! use chrono::Duration;
//!
//! let provider = TokenProvider::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(5));
//!
//! let issued = provider.issue("alice").unwrap();
//! let claims = provider.validate(&issued.token).unwrap();
//! assert_eq!(claims.sub, "alice");
//!
//! // A refreshed token is a brand-new token for the same subject.
//! let refreshed = provider.refresh(&issued.token).unwrap();
//! assert_eq!(refreshed.subject, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenProvider;
