use std::sync::Arc;

use auth_core::PasswordHasher;
use auth_core::TokenProvider;
use auth_service::account::models::Account;
use auth_service::account::models::Login;
use auth_service::account::ports::AccountStore;
use auth_service::account::ports::AuthServicePort;
use auth_service::account::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::repositories::FixedAccountStore;
use auth_service::repositories::InMemoryAccountStore;
use chrono::Duration;
use serde_json::json;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Shares the server's signing secret and ttl, for crafting tokens
    /// in tests
    pub token_provider: TokenProvider,
}

impl TestApp {
    /// Spawn with an empty mutable store and a comfortable ttl
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(Duration::seconds(60)).await
    }

    pub async fn spawn_with_ttl(ttl: Duration) -> Self {
        Self::spawn_service(Arc::new(InMemoryAccountStore::new()), ttl).await
    }

    /// Spawn against a read-only store seeded with (login, password) pairs
    pub async fn spawn_read_only(seeds: &[(&str, &str)]) -> Self {
        let hasher = PasswordHasher::new();
        let accounts: Vec<Account> = seeds
            .iter()
            .map(|(login, password)| {
                Account::new(
                    Login::new((*login).to_string()).expect("invalid seed login"),
                    hasher.hash(password).expect("Failed to hash seed password"),
                )
            })
            .collect();

        Self::spawn_service(
            Arc::new(FixedAccountStore::new(accounts)),
            Duration::seconds(60),
        )
        .await
    }

    async fn spawn_service<S: AccountStore>(store: Arc<S>, ttl: Duration) -> Self {
        let token_provider = TokenProvider::new(TEST_SECRET, ttl);
        let auth_service: Arc<dyn AuthServicePort> =
            Arc::new(AuthService::new(store, token_provider.clone()));

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_provider,
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub async fn signup(&self, login: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/signup")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute signup request")
    }

    pub async fn signin(&self, login: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/signin")
            .json(&json!({ "login": login, "password": password }))
            .send()
            .await
            .expect("Failed to execute signin request")
    }

    pub async fn check(&self, token: &str) -> reqwest::Response {
        self.get("/api/auth/check")
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .expect("Failed to execute check request")
    }
}
