use std::sync::Arc;

use auth_core::TokenProvider;
use auth_service::account::models::Account;
use auth_service::account::models::Login;
use auth_service::account::ports::AuthServicePort;
use auth_service::account::service::AuthService;
use auth_service::config::Config;
use auth_service::inbound::http::router::create_router;
use auth_service::repositories::FixedAccountStore;
use auth_service::repositories::InMemoryAccountStore;
use chrono::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = config.jwt.ttl_seconds,
        read_only_store = config.store.read_only,
        seeded_accounts = config.store.accounts.len(),
        "Configuration loaded"
    );

    let token_provider = TokenProvider::new(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.ttl_seconds),
    );

    let mut seeds = Vec::with_capacity(config.store.accounts.len());
    for entry in &config.store.accounts {
        let login = Login::new(entry.login.clone())
            .map_err(|e| anyhow::anyhow!("invalid seeded login {:?}: {}", entry.login, e))?;
        seeds.push(Account::new(login, entry.password_hash.clone()));
    }

    let auth_service: Arc<dyn AuthServicePort> = if config.store.read_only {
        Arc::new(AuthService::new(
            Arc::new(FixedAccountStore::new(seeds)),
            token_provider,
        ))
    } else {
        Arc::new(AuthService::new(
            Arc::new(InMemoryAccountStore::with_accounts(seeds)),
            token_provider,
        ))
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service)).await?;

    Ok(())
}
