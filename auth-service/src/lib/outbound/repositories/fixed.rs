use std::collections::HashMap;

use async_trait::async_trait;

use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Login;
use crate::account::ports::AccountStore;

/// Read-only account store seeded at construction.
///
/// For deployments with a fixed set of pre-provisioned accounts. The map
/// never changes after construction, so lookups need no synchronization;
/// `create` always fails.
#[derive(Debug)]
pub struct FixedAccountStore {
    accounts: HashMap<String, Account>,
}

impl FixedAccountStore {
    pub fn new(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.login.as_str().to_owned(), account))
            .collect();

        Self { accounts }
    }
}

#[async_trait]
impl AccountStore for FixedAccountStore {
    async fn find_by_login(&self, login: &Login) -> Result<Option<Account>, AuthError> {
        Ok(self.accounts.get(login.as_str()).cloned())
    }

    async fn create(&self, _account: Account) -> Result<Account, AuthError> {
        Err(AuthError::ReadOnlyStore)
    }
}
