// core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

use crate::schema::FieldErrors;

/// Failures produced by the catalog: request validation, business rules, lookups
/// and whatever the storage collaborator reports.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// Structural problems with a payload (missing field, wrong type, too long...).
  /// Carries every offending field, not only the first one.
  #[error("Structural validation failed for {} field(s)", .0.len())]
  Validation(FieldErrors),

  /// A structurally valid payload broke a domain rule (e.g. negative price).
  #[error("Business rule violated: {0}")]
  BusinessRule(String),

  #[error("Product {id} not found")]
  NotFound { id: i64 },

  /// Error raised by the repository implementation. Never shown to API clients.
  #[error("Storage operation failed. Source: {source:#}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal catalog error: {0}")]
  Internal(String),
}

impl CatalogError {
  /// Wraps any storage-level error (sqlx, io, ...) as `CatalogError::Storage`.
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    CatalogError::Storage {
      source: AnyhowError::new(err),
    }
  }

  /// Same as [`CatalogError::storage`], naming the operation that failed.
  pub fn storage_during<E>(operation: &'static str, err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    CatalogError::Storage {
      source: AnyhowError::new(err).context(operation),
    }
  }
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
