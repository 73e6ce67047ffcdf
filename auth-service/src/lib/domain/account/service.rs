use std::sync::Arc;

use async_trait::async_trait;
use auth_core::IssuedToken;
use auth_core::PasswordHasher;
use auth_core::TokenError;
use auth_core::TokenProvider;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Login;
use crate::account::models::TokenIdentity;
use crate::account::ports::AccountStore;
use crate::account::ports::AuthServicePort;

/// Authentication orchestrator.
///
/// Composes the account store, the password hasher, and the token provider
/// into the four operations. Holds no state of its own beyond the injected
/// collaborators; every operation other than signup leaves the store
/// untouched.
pub struct AuthService<S>
where
    S: AccountStore,
{
    store: Arc<S>,
    password_hasher: PasswordHasher,
    token_provider: TokenProvider,
}

impl<S> AuthService<S>
where
    S: AccountStore,
{
    /// Create the orchestrator with an injected store and token provider.
    ///
    /// The token provider carries the process-wide signing secret and the
    /// configured time-to-live.
    pub fn new(store: Arc<S>, token_provider: TokenProvider) -> Self {
        Self {
            store,
            password_hasher: PasswordHasher::new(),
            token_provider,
        }
    }
}

#[async_trait]
impl<S> AuthServicePort for AuthService<S>
where
    S: AccountStore,
{
    async fn signin(&self, login: &Login, password: &str) -> Result<IssuedToken, AuthError> {
        let account = self
            .store
            .find_by_login(login)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(login.to_string()))?;

        if !self
            .password_hasher
            .verify(password, &account.password_hash)?
        {
            return Err(AuthError::WrongPassword);
        }

        let issued = self.token_provider.issue(account.login.as_str())?;
        tracing::debug!(login = %account.login, "token issued");

        Ok(issued)
    }

    async fn signup(&self, login: Login, password: &str) -> Result<Account, AuthError> {
        let password_hash = self.password_hasher.hash(password)?;

        let account = self.store.create(Account::new(login, password_hash)).await?;
        tracing::info!(login = %account.login, "account created");

        Ok(account)
    }

    async fn check(&self, token: &str) -> Result<TokenIdentity, AuthError> {
        let claims = self.token_provider.validate(token)?;
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| TokenError::Malformed("expiry out of range".to_string()))?;

        // Confirm the subject still exists; the token may outlive the
        // account it was issued for. A subject that is not even a valid
        // login certainly has no account.
        let login = Login::new(claims.sub.clone())
            .map_err(|_| AuthError::UserNotFound(claims.sub))?;
        let account = self
            .store
            .find_by_login(&login)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(login.to_string()))?;

        Ok(TokenIdentity {
            login: account.login,
            expires_at,
        })
    }

    async fn refresh(&self, token: &str) -> Result<IssuedToken, AuthError> {
        let identity = self.check(token).await?;
        Ok(self.token_provider.issue(identity.login.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;
    use mockall::mock;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestAccountStore {}

        #[async_trait]
        impl AccountStore for TestAccountStore {
            async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AuthError>;
            async fn create(&self, account: Account) -> Result<Account, AuthError>;
        }
    }

    fn provider() -> TokenProvider {
        TokenProvider::new(SECRET, Duration::minutes(5))
    }

    fn stored_account(login: &str, password: &str) -> Account {
        let hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash password");
        Account::new(Login::new(login.to_string()).unwrap(), hash)
    }

    #[tokio::test]
    async fn test_signin_success() {
        let mut store = MockTestAccountStore::new();
        let account = stored_account("alice", "password1");

        store
            .expect_find_by_login()
            .withf(|login| login.as_str() == "alice")
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = AuthService::new(Arc::new(store), provider());

        let login = Login::new("alice".to_string()).unwrap();
        let issued = service.signin(&login, "password1").await.unwrap();

        assert!(!issued.token.is_empty());
        assert_eq!(issued.subject, "alice");
        assert!(issued.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn test_signin_wrong_password() {
        let mut store = MockTestAccountStore::new();
        let account = stored_account("alice", "password1");

        store
            .expect_find_by_login()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let service = AuthService::new(Arc::new(store), provider());

        let login = Login::new("alice".to_string()).unwrap();
        let result = service.signin(&login, "not the password").await;

        assert!(matches!(result, Err(AuthError::WrongPassword)));
    }

    #[tokio::test]
    async fn test_signin_unknown_login() {
        let mut store = MockTestAccountStore::new();

        store
            .expect_find_by_login()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(store), provider());

        let login = Login::new("ghost".to_string()).unwrap();
        let result = service.signin(&login, "whatever").await;

        assert!(matches!(result, Err(AuthError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_signup_stores_hash_not_plaintext() {
        let mut store = MockTestAccountStore::new();

        store
            .expect_create()
            .withf(|account| {
                account.login.as_str() == "bob"
                    && account.password_hash.starts_with("$argon2")
                    && account.password_hash != "password1"
            })
            .times(1)
            .returning(|account| Ok(account));

        let service = AuthService::new(Arc::new(store), provider());

        let account = service
            .signup(Login::new("bob".to_string()).unwrap(), "password1")
            .await
            .unwrap();

        assert_eq!(account.login.as_str(), "bob");
    }

    #[tokio::test]
    async fn test_signup_duplicate_login() {
        let mut store = MockTestAccountStore::new();

        store.expect_create().times(1).returning(|account| {
            Err(AuthError::LoginAlreadyExists(account.login.to_string()))
        });

        let service = AuthService::new(Arc::new(store), provider());

        let result = service
            .signup(Login::new("bob".to_string()).unwrap(), "password1")
            .await;

        assert!(matches!(result, Err(AuthError::LoginAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_signup_read_only_store() {
        let mut store = MockTestAccountStore::new();

        store
            .expect_create()
            .times(1)
            .returning(|_| Err(AuthError::ReadOnlyStore));

        let service = AuthService::new(Arc::new(store), provider());

        let result = service
            .signup(Login::new("bob".to_string()).unwrap(), "password1")
            .await;

        assert!(matches!(result, Err(AuthError::ReadOnlyStore)));
    }

    #[tokio::test]
    async fn test_signin_then_check_resolves_login() {
        let mut store = MockTestAccountStore::new();
        let account = stored_account("alice", "password1");

        store
            .expect_find_by_login()
            .times(2)
            .returning(move |_| Ok(Some(account.clone())));

        let service = AuthService::new(Arc::new(store), provider());

        let login = Login::new("alice".to_string()).unwrap();
        let issued = service.signin(&login, "password1").await.unwrap();

        let identity = service.check(&issued.token).await.unwrap();
        assert_eq!(identity.login.as_str(), "alice");
        assert_eq!(
            identity.expires_at.timestamp(),
            issued.expires_at.timestamp()
        );
    }

    #[tokio::test]
    async fn test_check_subject_removed_after_issuance() {
        let mut store = MockTestAccountStore::new();

        store
            .expect_find_by_login()
            .times(1)
            .returning(|_| Ok(None));

        let token_provider = provider();
        let issued = token_provider.issue("alice").unwrap();

        let service = AuthService::new(Arc::new(store), token_provider);

        let result = service.check(&issued.token).await;
        assert!(matches!(result, Err(AuthError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_check_malformed_token_skips_store() {
        let mut store = MockTestAccountStore::new();
        store.expect_find_by_login().times(0);

        let service = AuthService::new(Arc::new(store), provider());

        let result = service.check("not a token").await;
        assert!(matches!(
            result,
            Err(AuthError::Token(TokenError::Malformed(_)))
        ));
    }

    #[tokio::test]
    async fn test_check_expired_token() {
        let mut store = MockTestAccountStore::new();
        store.expect_find_by_login().times(0);

        let token_provider = TokenProvider::new(SECRET, Duration::seconds(-1));
        let issued = token_provider.issue("alice").unwrap();

        let service = AuthService::new(Arc::new(store), token_provider);

        let result = service.check(&issued.token).await;
        assert!(matches!(result, Err(AuthError::Token(TokenError::Expired))));
    }

    #[tokio::test]
    async fn test_refresh_issues_new_token_for_same_subject() {
        let mut store = MockTestAccountStore::new();
        let account = stored_account("alice", "password1");

        store
            .expect_find_by_login()
            .times(1)
            .returning(move |_| Ok(Some(account.clone())));

        let token_provider = provider();
        let issued = token_provider.issue("alice").unwrap();

        let service = AuthService::new(Arc::new(store), token_provider);

        let refreshed = service.refresh(&issued.token).await.unwrap();
        assert_eq!(refreshed.subject, "alice");
        assert_ne!(refreshed.token, "");
    }

    #[tokio::test]
    async fn test_refresh_invalid_token_fails() {
        let mut store = MockTestAccountStore::new();
        store.expect_find_by_login().times(0);

        let service = AuthService::new(Arc::new(store), provider());

        let result = service.refresh("not a token").await;
        assert!(matches!(result, Err(AuthError::Token(_))));
    }
}
