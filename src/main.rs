use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notification_backend::app_state::AppState;
use notification_backend::auth::adapter::outgoing::{
    RedisTokenBlacklistRepository, TokenBlacklistPostgres,
};
use notification_backend::auth::application::domain::entities::BlacklistToken;
use notification_backend::config::{AppConfig, BlacklistBackend};
use notification_backend::notification::adapter::outgoing::{
    NotificationSettingsPostgres, UserPreferencePostgres,
};
use notification_backend::store::application::ports::outgoing::KeyedEntityStore;

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Redis TLS connections need a process-wide crypto provider
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&conn, None)
        .await
        .context("Failed to run database migrations")?;

    let db_arc = Arc::new(conn);

    // Redis connection, only when the blacklist lives there
    let redis_arc = match &config.redis_url {
        Some(redis_url) => {
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            Some(Arc::new(redis_pool))
        }
        None => None,
    };

    // Stores
    let blacklist: Arc<dyn KeyedEntityStore<BlacklistToken>> =
        match (config.blacklist_backend, &redis_arc) {
            (BlacklistBackend::Redis, Some(pool)) => Arc::new(
                RedisTokenBlacklistRepository::new(Arc::clone(pool))
                    .with_timeout(config.store_timeout),
            ),
            (BlacklistBackend::Redis, None) => {
                anyhow::bail!("REDIS_URL is required for the Redis token blacklist")
            }
            (BlacklistBackend::Postgres, _) => Arc::new(
                TokenBlacklistPostgres::new(Arc::clone(&db_arc))
                    .with_timeout(config.store_timeout),
            ),
        };
    info!(backend = ?config.blacklist_backend, "Token blacklist ready");

    let settings_repo =
        NotificationSettingsPostgres::new(Arc::clone(&db_arc)).with_timeout(config.store_timeout);
    let preference_repo =
        UserPreferencePostgres::new(Arc::clone(&db_arc)).with_timeout(config.store_timeout);

    let state = AppState::new(blacklist, settings_repo, preference_repo);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)));

        // Readiness skips the Redis check when no pool is registered
        if let Some(pool) = &redis_arc {
            app = app.app_data(web::Data::new(Arc::clone(pool)));
        }

        app.configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(notification_backend::health::health);
    cfg.service(notification_backend::health::readiness);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
