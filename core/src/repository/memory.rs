// core/src/repository/memory.rs

use super::ProductRepository;
use crate::error::CatalogResult;
use crate::model::{NewProduct, Product, ProductChanges};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct Table {
  rows: BTreeMap<i64, Product>,
  // Last id handed out. Ids of deleted rows are never reused.
  last_id: i64,
}

/// `ProductRepository` kept in process memory.
///
/// Every method takes the lock once and releases it before returning, so no guard
/// is ever held across an `.await`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
  table: RwLock<Table>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn insert(&self, product: NewProduct) -> CatalogResult<Product> {
    let mut table = self.table.write();
    table.last_id += 1;
    let stored = product.into_product(table.last_id);
    table.rows.insert(stored.id, stored.clone());
    Ok(stored)
  }

  async fn list(&self) -> CatalogResult<Vec<Product>> {
    Ok(self.table.read().rows.values().cloned().collect())
  }

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
    Ok(self.table.read().rows.get(&id).cloned())
  }

  async fn update(&self, id: i64, changes: &ProductChanges) -> CatalogResult<Option<Product>> {
    let mut table = self.table.write();
    Ok(table.rows.get_mut(&id).map(|row| {
      changes.apply_to(row);
      row.clone()
    }))
  }

  async fn delete(&self, id: i64) -> CatalogResult<bool> {
    Ok(self.table.write().rows.remove(&id).is_some())
  }

  async fn count(&self) -> CatalogResult<i64> {
    Ok(self.table.read().rows.len() as i64)
  }
}
