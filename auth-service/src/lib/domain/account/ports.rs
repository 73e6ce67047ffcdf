use async_trait::async_trait;
use auth_core::IssuedToken;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Login;
use crate::account::models::TokenIdentity;

/// Port for the authentication orchestration operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token for the login.
    ///
    /// # Errors
    /// * `UserNotFound` - no account with this login
    /// * `WrongPassword` - password does not match the stored hash
    /// * `Password` / `Token` - hashing or signing fault
    async fn signin(&self, login: &Login, password: &str) -> Result<IssuedToken, AuthError>;

    /// Hash the password and create a new account.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - login is already taken
    /// * `ReadOnlyStore` - the store does not accept new accounts
    /// * `Password` - hashing fault
    async fn signup(&self, login: Login, password: &str) -> Result<Account, AuthError>;

    /// Validate a token and confirm its subject still exists.
    ///
    /// # Errors
    /// * `Token` - signature invalid, expired, or malformed
    /// * `UserNotFound` - subject was removed after the token was issued
    async fn check(&self, token: &str) -> Result<TokenIdentity, AuthError>;

    /// Validate a token and issue a fresh one for the same subject.
    ///
    /// The presented token stays valid until its own expiry; nothing is
    /// revoked.
    ///
    /// # Errors
    /// Same as [`check`](Self::check), plus `Token` on re-issuance faults.
    async fn refresh(&self, token: &str) -> Result<IssuedToken, AuthError>;
}

/// Persistence operations for accounts.
///
/// Lookup is by exact login match. Implementations must be safe under
/// concurrent signin/signup/check calls.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Retrieve an account by login.
    ///
    /// # Returns
    /// Optional account (None if not found)
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AuthError>;

    /// Persist a new account.
    ///
    /// # Errors
    /// * `LoginAlreadyExists` - login is already taken
    /// * `ReadOnlyStore` - this store variant does not accept writes
    async fn create(&self, account: Account) -> Result<Account, AuthError>;
}
