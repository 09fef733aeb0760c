// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use productos_app::config::AppConfig;
use productos_app::state::AppState;
use serde_json::{json, Value};

// --- Common Fixtures ---

/// Configuration pointing at a private in-memory SQLite database.
///
/// One connection only: every connection to `sqlite::memory:` opens its own database.
pub fn memory_sqlite_config() -> AppConfig {
  AppConfig::from_lookup(|name| match name {
    "DATABASE_URL" => Some("sqlite::memory:".to_string()),
    "DATABASE_MAX_CONNECTIONS" => Some("1".to_string()),
    _ => None,
  })
  .expect("in-memory test configuration is valid")
}

pub async fn test_state() -> AppState {
  productos_app::build_app_state(&memory_sqlite_config())
    .await
    .expect("failed to build test state")
}

pub fn teclado_payload() -> Value {
  json!({"nombre": "Teclado", "precio": 49.99, "stock": 120})
}

pub fn laptop_payload() -> Value {
  json!({
    "nombre": "Laptop Gamer Pro",
    "descripcion": "Laptop con RTX 4090 y 32GB RAM",
    "precio": 1999.99,
    "stock": 50
  })
}

/// Builds the real application around `$state` and initializes it as a test service.
#[macro_export]
macro_rules! test_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(productos_app::web::configure_app_routes),
    )
    .await
  };
}
