#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use expense_lib::config::Config;

/// In-flight requests get this long to finish after SIGINT/SIGTERM.
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set up tracing subscriber")?;
    info!("tracing initialized");

    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "reading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("no config file found, reading config from environment");
            Config::from_env()?
        }
    };

    let expense_repo =
        expense_repo::sqlx_repo::create_repo(&config.database_url, config.max_connections)
            .await
            .map_err(|e| {
                error!("{:#}", e);
                e
            })?;

    let credentials = config.credentials;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func(
                expense_repo.clone(),
                credentials.clone(),
            ))
    })
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Unable to bind port {}", config.port))?;

    info!(port = config.port, "server started");
    server.run().await.context("Server error")?;
    info!("server stopped");

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
