use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Login;
use crate::account::ports::AccountStore;

/// Mutable in-memory account store.
///
/// The map is the only shared mutable state in the service; every access
/// goes through the lock so concurrent signup and lookup stay race-free.
/// Duplicate logins are rejected, not overwritten.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing accounts.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.login.as_str().to_owned(), account))
            .collect();

        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AuthError> {
        Ok(self.accounts.read().await.get(login.as_str()).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(account.login.as_str()) {
            return Err(AuthError::LoginAlreadyExists(account.login.to_string()));
        }

        accounts.insert(account.login.as_str().to_owned(), account.clone());
        Ok(account)
    }
}
