// core/src/catalog.rs

//! `ProductCatalog`: the five CRUD transitions, independent of any HTTP framework.
//!
//! Each operation follows the same shape:
//!   1. look the row up when the operation targets an id (`NotFound` otherwise),
//!   2. structural validation through `ProductSchema` (`Validation`),
//!   3. business rules from [`crate::rules`] (`BusinessRule`),
//!   4. a single repository call that performs the write.
//!
//! Nothing is written unless steps 1-3 all succeed.

use crate::error::{CatalogError, CatalogResult};
use crate::model::Product;
use crate::repository::ProductRepository;
use crate::rules;
use crate::schema::ProductSchema;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct ProductCatalog {
  repository: Arc<dyn ProductRepository>,
  create_schema: ProductSchema,
  update_schema: ProductSchema,
}

impl std::fmt::Debug for ProductCatalog {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProductCatalog")
      .field("create_schema", &self.create_schema)
      .field("update_schema", &self.update_schema)
      .finish_non_exhaustive()
  }
}

impl ProductCatalog {
  /// Catalog with the default schemas: strict on create, lenient on update.
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self::with_schemas(repository, ProductSchema::new(), ProductSchema::partial())
  }

  pub fn with_schemas(
    repository: Arc<dyn ProductRepository>,
    create_schema: ProductSchema,
    update_schema: ProductSchema,
  ) -> Self {
    Self {
      repository,
      create_schema,
      update_schema,
    }
  }

  /// Schema used to render products on the way out.
  pub fn schema(&self) -> &ProductSchema {
    &self.create_schema
  }

  pub fn repository(&self) -> &Arc<dyn ProductRepository> {
    &self.repository
  }

  #[instrument(name = "catalog::create", skip_all)]
  pub async fn create(&self, payload: &Value) -> CatalogResult<Product> {
    let new_product = self.create_schema.load(payload).map_err(|errors| {
      warn!(fields = errors.len(), "Create rejected: invalid payload.");
      CatalogError::Validation(errors)
    })?;

    rules::check_new(&new_product).map_err(|e| {
      warn!(error = %e, "Create rejected by business rule.");
      e
    })?;

    let product = self.repository.insert(new_product).await?;
    info!(product_id = product.id, "Product created.");
    Ok(product)
  }

  #[instrument(name = "catalog::list", skip_all)]
  pub async fn list(&self) -> CatalogResult<Vec<Product>> {
    let products = self.repository.list().await?;
    info!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "catalog::get", skip(self))]
  pub async fn get(&self, id: i64) -> CatalogResult<Product> {
    match self.repository.find(id).await? {
      Some(product) => Ok(product),
      None => {
        warn!("Product not found.");
        Err(CatalogError::NotFound { id })
      }
    }
  }

  /// Partial update with all-or-nothing semantics: every present field is validated
  /// (structure, then rules) before the repository sees anything.
  #[instrument(name = "catalog::update", skip(self, payload))]
  pub async fn update(&self, id: i64, payload: &Value) -> CatalogResult<Product> {
    // Existence first: an unknown id is a 404 even with a broken payload.
    let current = self.get(id).await?;

    let changes = self.update_schema.load_changes(payload).map_err(|errors| {
      warn!(fields = errors.len(), "Update rejected: invalid payload.");
      CatalogError::Validation(errors)
    })?;

    rules::check_changes(&changes).map_err(|e| {
      warn!(error = %e, "Update rejected by business rule.");
      e
    })?;

    if changes.is_empty() {
      info!("Update carried no writable field; nothing to store.");
      return Ok(current);
    }

    match self.repository.update(id, &changes).await? {
      Some(product) => {
        info!(changed = ?changes.field_names(), "Product updated.");
        Ok(product)
      }
      None => {
        // Deleted between the lookup and the write.
        warn!("Product vanished before the update was applied.");
        Err(CatalogError::NotFound { id })
      }
    }
  }

  #[instrument(name = "catalog::delete", skip(self))]
  pub async fn delete(&self, id: i64) -> CatalogResult<()> {
    if self.repository.delete(id).await? {
      info!("Product deleted.");
      Ok(())
    } else {
      warn!("Product not found.");
      Err(CatalogError::NotFound { id })
    }
  }
}
