// core/src/schema/mod.rs

//! Mapping between wire JSON and `Product` values.
//!
//! `ProductSchema` performs *structural* validation only: presence, JSON type and
//! length of each field. Domain rules such as "price must not be negative" live in
//! [`crate::rules`] and run after the schema accepted the payload.
//!
//! Two loading modes exist:
//!  - [`ProductSchema::load`]: full create payload, required fields enforced.
//!  - [`ProductSchema::load_changes`]: partial update, only present fields validated.
//!
//! Both collect every field error before failing, so a client sees all problems at once.

pub mod field_errors;
pub mod loader;

pub use field_errors::{FieldErrors, SCHEMA_KEY};

use crate::error::{CatalogError, CatalogResult};
use crate::model::Product;
use serde_json::Value;

/// Messages reported in [`FieldErrors`].
pub mod messages {
  pub const MISSING: &str = "Missing data for required field.";
  pub const NULL: &str = "Field may not be null.";
  pub const NOT_STRING: &str = "Not a valid string.";
  pub const NOT_NUMBER: &str = "Not a valid number.";
  pub const NOT_INTEGER: &str = "Not a valid integer.";
  pub const UNKNOWN: &str = "Unknown field.";
  pub const INVALID_INPUT: &str = "Invalid input type.";

  pub fn too_short(min: usize) -> String {
    format!("Shorter than minimum length {}.", min)
  }

  pub fn too_long(max: usize) -> String {
    format!("Longer than maximum length {}.", max)
  }
}

/// What to do with payload keys that are not writable `Product` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFields {
  /// Report each one as `Unknown field.`.
  Raise,
  /// Drop them silently.
  Exclude,
}

/// Validator/deserializer for `Product` payloads.
///
/// Cheap to copy; handlers receive an instance through the catalog instead of
/// reaching for a process-wide registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSchema {
  unknown: UnknownFields,
}

impl Default for ProductSchema {
  fn default() -> Self {
    Self::new()
  }
}

impl ProductSchema {
  /// Schema used for creation: unknown keys (including `id`) are rejected.
  pub fn new() -> Self {
    Self {
      unknown: UnknownFields::Raise,
    }
  }

  /// Schema used for partial updates: unknown keys (including `id`) are ignored.
  pub fn partial() -> Self {
    Self {
      unknown: UnknownFields::Exclude,
    }
  }

  /// Outbound representation of one product.
  pub fn dump(&self, product: &Product) -> CatalogResult<Value> {
    serde_json::to_value(product)
      .map_err(|e| CatalogError::Internal(format!("cannot serialize product {}: {}", product.id, e)))
  }

  /// Outbound representation of a list of products (always an array).
  pub fn dump_many(&self, products: &[Product]) -> CatalogResult<Value> {
    products
      .iter()
      .map(|p| self.dump(p))
      .collect::<CatalogResult<Vec<_>>>()
      .map(Value::Array)
  }
}
