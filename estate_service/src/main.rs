use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use estate_service::api::{self, context::ApiContext};
use estate_service::config::{Config, Environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));
    init_telemetry(Environment::new_or_prod());

    let config = Config::from_env().context("expected to be able to generate config")?;
    tracing::info!(environment = %config.environment, "initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to estatedb")?;
    tracing::info!(
        min_connections,
        max_connections,
        "initialized estatedb connection pool"
    );

    estate_db_client::ESTATE_DB_MIGRATIONS
        .run(&db)
        .await
        .context("could not run estatedb migrations")?;
    tracing::info!("estatedb migrations are up to date");

    api::setup_and_serve(ApiContext {
        db,
        config: Arc::new(config),
    })
    .await
}

/// Pretty logs for local work, flattened JSON lines everywhere else.
fn init_telemetry(environment: Environment) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .pretty()
                .with_ansi(true)
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .json()
                .flatten_event(true)
                .init();
        }
    }
}
