use anyhow::{Context, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

/// Application configuration loaded from environment variables.
/// Every variable has a local default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", "5")
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
