use std::path::PathBuf;

use anyhow::Context;

/// Where the startup import reads product rows from. Not overridable.
pub const STOCKS_CSV_PATH: &str = "data/stocks.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub import_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            import_path: PathBuf::from(STOCKS_CSV_PATH),
        })
    }
}
