// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use productos::{InMemoryProductRepository, ProductCatalog, ProductRepository};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Level;

// --- Common Fixtures ---

/// Catalog over a fresh in-memory store, plus the store itself for direct inspection.
pub fn new_catalog() -> (ProductCatalog, Arc<InMemoryProductRepository>) {
  let repository = Arc::new(InMemoryProductRepository::new());
  let catalog = ProductCatalog::new(repository.clone() as Arc<dyn ProductRepository>);
  (catalog, repository)
}

pub fn teclado_payload() -> Value {
  json!({"nombre": "Teclado", "precio": 49.99, "stock": 120})
}

pub fn full_payload(nombre: &str, precio: f64, stock: i64) -> Value {
  json!({
    "nombre": nombre,
    "descripcion": format!("Descripción de {}", nombre),
    "precio": precio,
    "stock": stock
  })
}

/// A spread of payloads that must all be accepted.
pub fn valid_payloads() -> Vec<Value> {
  vec![
    teclado_payload(),
    full_payload("Producto de Prueba", 10.99, 100),
    full_payload("Gratis", 0.0, 0),
    json!({"nombre": "ñandú", "descripcion": null, "precio": 3, "stock": 7.0}),
    json!({"nombre": "x".repeat(100), "descripcion": "y".repeat(255), "precio": 1e9, "stock": i64::MAX}),
  ]
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
