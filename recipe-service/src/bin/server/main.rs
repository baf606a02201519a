use std::str::FromStr;
use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordScheme;
use recipe_service::config::Config;
use recipe_service::credential::service::AuthService;
use recipe_service::inbound::http::router::create_router;
use recipe_service::outbound::cache::DisabledRecipeCache;
use recipe_service::outbound::cache::RedisRecipeCache;
use recipe_service::recipe::ports::RecipeServicePort;
use recipe_service::recipe::service::RecipeService;
use recipe_service::repositories::PostgresCredentialRepository;
use recipe_service::repositories::PostgresRecipeRepository;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipe_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "recipe-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cache_enabled = config.cache.url.is_some(),
        legacy_password_digest = config.auth.legacy_password_digest,
        "Configuration loaded"
    );

    let mut connect_options = PgConnectOptions::from_str(&config.database.url)?;
    if let Some(name) = &config.database.name {
        connect_options = connect_options.database(name);
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let scheme = if config.auth.legacy_password_digest {
        tracing::warn!("Legacy unsalted SHA-256 password digest enabled");
        PasswordScheme::LegacySha256
    } else {
        PasswordScheme::Argon2id
    };
    let authenticator = Arc::new(Authenticator::with_scheme(
        config.jwt.secret.as_bytes(),
        scheme,
    )?);

    let credential_repository = Arc::new(PostgresCredentialRepository::new(pg_pool.clone()));
    let recipe_repository = Arc::new(PostgresRecipeRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        credential_repository,
        Arc::clone(&authenticator),
        config.token_policy(),
    ));

    let recipe_service: Arc<dyn RecipeServicePort> = match &config.cache.url {
        Some(url) => {
            let cache = RedisRecipeCache::connect(url, config.cache.ttl_seconds).await?;
            tracing::info!(ttl_seconds = config.cache.ttl_seconds, "Recipe list cache enabled");
            Arc::new(RecipeService::new(recipe_repository, Arc::new(cache)))
        }
        None => {
            tracing::info!("Recipe list cache disabled");
            Arc::new(RecipeService::new(
                recipe_repository,
                Arc::new(DisabledRecipeCache),
            ))
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, recipe_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    Ok(())
}
