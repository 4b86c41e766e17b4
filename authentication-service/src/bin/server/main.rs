use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::KeyLoader;
use auth::PasswordHasher;
use auth::TokenIssuer;
use authentication_service::config::Config;
use authentication_service::domain::user::service::AuthenticationService;
use authentication_service::inbound::http::router::create_router;
use authentication_service::outbound::authentication::TokenAuthenticator;
use authentication_service::outbound::repositories::PostgresUserRepository;
use authentication_service::shutdown::shutdown_signal;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "authentication_service=debug,auth=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "authentication-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        src_path = %config.src_path.display(),
        request_timeout_secs = config.server.request_timeout_secs,
        token_expiration_hours = ?config.token.expiration_hours,
        "Configuration loaded"
    );

    let key_path = config.private_key_path();
    let signing_key = KeyLoader::load_private_key(&key_path).map_err(|e| {
        tracing::error!(path = %key_path.display(), error = %e, "Failed to load signing key");
        e
    })?;
    tracing::info!(
        path = %key_path.display(),
        algorithm = ?signing_key.algorithm(),
        "Signing key loaded"
    );

    let password_hasher = PasswordHasher::with_params(
        config.password.memory_cost_kib,
        config.password.time_cost,
        config.password.parallelism,
    )?;

    let token_issuer = TokenIssuer::new(Arc::new(signing_key));
    let token_issuer = match config.token.expiration_hours {
        Some(hours) => token_issuer.with_expiration_hours(hours)?,
        None => token_issuer,
    };

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(TokenAuthenticator::new(Arc::new(Authenticator::new(
        password_hasher,
        token_issuer,
    ))));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let auth_service = Arc::new(AuthenticationService::new(user_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
