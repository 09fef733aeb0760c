// core/src/rules.rs

//! Domain rules checked after a payload passed structural validation.
//!
//! The store itself does not enforce them (`REAL`/`INTEGER` columns accept negatives),
//! so every write path must go through these checks.

use crate::error::CatalogError;
use crate::model::{NewProduct, ProductChanges};

pub const PRECIO_NEGATIVO: &str = "El precio no puede ser negativo";
pub const STOCK_NEGATIVO: &str = "El stock no puede ser negativo";

pub fn check_precio(precio: f64) -> Result<(), CatalogError> {
  if precio < 0.0 {
    return Err(CatalogError::BusinessRule(PRECIO_NEGATIVO.to_string()));
  }
  Ok(())
}

pub fn check_stock(stock: i64) -> Result<(), CatalogError> {
  if stock < 0 {
    return Err(CatalogError::BusinessRule(STOCK_NEGATIVO.to_string()));
  }
  Ok(())
}

/// Price first, then stock; the first violation wins.
pub fn check_new(product: &NewProduct) -> Result<(), CatalogError> {
  check_precio(product.precio)?;
  check_stock(product.stock)
}

/// Same order as [`check_new`], applied only to the fields being changed.
pub fn check_changes(changes: &ProductChanges) -> Result<(), CatalogError> {
  if let Some(precio) = changes.precio {
    check_precio(precio)?;
  }
  if let Some(stock) = changes.stock {
    check_stock(stock)?;
  }
  Ok(())
}
