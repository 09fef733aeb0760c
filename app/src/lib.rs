// app/src/lib.rs

//! HTTP surface of the product catalog: configuration, SQLite storage, the
//! error envelope and the Actix routes. `main.rs` wires these together; the
//! integration tests build the same `App` in-process.

pub mod config;
pub mod db;
pub mod errors;
pub mod state;
pub mod web;

use crate::config::{AppConfig, LogFormat};
use crate::errors::Result as AppResult;
use crate::state::AppState;
use productos::ProductCatalog;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. `RUST_LOG` overrides the INFO default.
pub fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .from_env_lossy();
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

/// Opens the configured store, seeds it if asked, and assembles the shared state.
pub async fn build_app_state(config: &AppConfig) -> AppResult<AppState> {
  let repository = db::build_repository(config).await?;
  let catalog = ProductCatalog::new(repository);

  if config.seed_db {
    db::seed_products(&catalog).await?;
  }

  Ok(AppState::new(catalog))
}
