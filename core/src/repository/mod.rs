// core/src/repository/mod.rs

//! Storage seam for the catalog.
//!
//! The catalog only talks to a `ProductRepository`; the application decides which
//! implementation backs it (SQLite in production, [`InMemoryProductRepository`] in
//! tests or when `DATABASE_URL=memory`).

pub mod memory;

pub use memory::InMemoryProductRepository;

use crate::error::CatalogResult;
use crate::model::{NewProduct, Product, ProductChanges};
use async_trait::async_trait;

/// Single-table CRUD on `productos`.
///
/// Implementations must make each method atomic on its own; the catalog never
/// spans a transaction over several calls.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Stores a new row and returns it with the id assigned by the store.
  async fn insert(&self, product: NewProduct) -> CatalogResult<Product>;

  /// Every row, in insertion (id ascending) order.
  async fn list(&self) -> CatalogResult<Vec<Product>>;

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>>;

  /// Read-modify-write of one row. `Ok(None)` when the row does not exist.
  async fn update(&self, id: i64, changes: &ProductChanges) -> CatalogResult<Option<Product>>;

  /// Hard delete. `Ok(false)` when the row did not exist.
  async fn delete(&self, id: i64) -> CatalogResult<bool>;

  /// Number of stored rows.
  async fn count(&self) -> CatalogResult<i64> {
    Ok(self.list().await?.len() as i64)
  }
}
