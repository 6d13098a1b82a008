use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use tk_api::{app::create_app, routes::auth::AppState};
use tk_core::repositories::{InMemoryUserRepository, RevocationStore, UserRepository};
use tk_core::services::{SessionManager, TokenServiceConfig};
use tk_infra::cache::RedisRevocationStore;
use tk_infra::repositories::HttpUserRepository;
use tk_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables; the per-environment file wins over .env
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger; RUST_LOG overrides the per-environment default
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    info!("Starting TokenKeeper API Server ({})", config.environment);

    for warning in config.security_warnings() {
        warn!("Configuration: {}", warning);
    }
    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        bail!("ACCESS_SECRET and REFRESH_SECRET must be set in production");
    }

    let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)
        .context("invalid token configuration")?;

    // The store connects on first use, so an unreachable Redis does not stop startup
    let store = Arc::new(
        RedisRevocationStore::from_config(config.cache.clone())
            .context("invalid revocation store configuration")?,
    );

    match config.auth.user_directory_url.as_deref() {
        Some(url) => {
            info!("Using user directory at {}", url);
            let timeout = Duration::from_secs(config.cache.response_timeout);
            let users = HttpUserRepository::new(url, timeout)
                .context("invalid user directory configuration")?;
            serve(&config, Arc::new(users), store, token_config).await
        }
        None => {
            warn!("USER_DIRECTORY_URL not set, using the built-in development user");
            serve(
                &config,
                Arc::new(InMemoryUserRepository::with_default_user()),
                store,
                token_config,
            )
            .await
        }
    }
}

async fn serve<U, S>(
    config: &AppConfig,
    users: Arc<U>,
    store: Arc<S>,
    token_config: TokenServiceConfig,
) -> anyhow::Result<()>
where
    U: UserRepository + 'static,
    S: RevocationStore + 'static,
{
    let session_manager =
        SessionManager::new(users, store, token_config, config.auth.session.clone())
            .context("failed to build session manager")?;
    if config.auth.session.enforce_rotation {
        info!("Refresh token rotation is enforced");
    }

    let app_state = web::Data::new(AppState::new(Arc::new(session_manager)));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
