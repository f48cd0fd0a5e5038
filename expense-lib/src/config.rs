use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};

use crate::auth::Credentials;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Deserialize)]
pub struct Config {
    pub database_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    pub credentials: Credentials,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = read_env("DATABASE_URL")?;
        let port = match env::var("PORT") {
            Ok(port) => port.parse().context("Unable to parse PORT value")?,
            Err(_) => DEFAULT_PORT,
        };
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(max) => max
                .parse()
                .context("Unable to parse DATABASE_MAX_CONNECTIONS value")?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        let credentials = Credentials::new(read_env("AUTH_USERNAME")?, read_env("AUTH_PASSWORD")?);

        let config = Config {
            database_url,
            port,
            max_connections,
            credentials,
        };
        Ok(config)
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
