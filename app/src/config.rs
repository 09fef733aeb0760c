// app/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

/// Where products are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
  /// sqlx SQLite connection string, e.g. `sqlite://instance/productos.db`.
  Sqlite(String),
  /// Process-local store, lost on restart (`DATABASE_URL=memory`).
  Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub storage: StorageBackend,
  pub database_max_connections: u32,
  pub log_format: LogFormat,

  // Insert a few sample products when the store starts empty
  pub seed_db: bool,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://instance/productos.db";

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_env = |var_name: &str, default: &str| lookup(var_name).unwrap_or_else(|| default.to_string());

    let server_host = get_env("SERVER_HOST", "127.0.0.1");
    let server_port = get_env("SERVER_PORT", "5000")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let database_url = get_env("DATABASE_URL", DEFAULT_DATABASE_URL);
    let storage = if database_url.eq_ignore_ascii_case("memory") {
      StorageBackend::Memory
    } else if database_url.starts_with("sqlite:") {
      StorageBackend::Sqlite(database_url)
    } else {
      return Err(AppError::Config(format!(
        "Unsupported DATABASE_URL '{}': expected a sqlite: URL or 'memory'",
        database_url
      )));
    };

    let database_max_connections = get_env("DATABASE_MAX_CONNECTIONS", "5")
      .parse::<u32>()
      .ok()
      .filter(|n| *n >= 1)
      .ok_or_else(|| AppError::Config("Invalid DATABASE_MAX_CONNECTIONS: expected an integer >= 1".to_string()))?;

    let log_format = match get_env("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT: {}", other))),
    };

    let seed_db = get_env("SEED_DB", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    Ok(Self {
      server_host,
      server_port,
      storage,
      database_max_connections,
      log_format,
      seed_db,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
