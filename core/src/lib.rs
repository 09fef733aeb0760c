// src/lib.rs

//! Productos: domain library for a small product catalog.
//!
//! The crate provides:
//!  - The `Product` entity and the static column table it is validated against.
//!  - `ProductSchema`, the JSON <-> entity mapper (full create and partial update).
//!  - Business rules applied after structural validation.
//!  - The `ProductRepository` storage seam with an in-memory implementation.
//!  - `ProductCatalog`, which runs the CRUD transitions on top of the above.
//!
//! HTTP concerns (status codes, envelopes, routing) are left to the application crate.

pub mod catalog;
pub mod error;
pub mod model;
pub mod repository;
pub mod rules;
pub mod schema;

// --- Re-exports for the Public API ---

pub use crate::catalog::ProductCatalog;
pub use crate::error::{CatalogError, CatalogResult};
pub use crate::model::{NewProduct, Product, ProductChanges};
pub use crate::repository::{InMemoryProductRepository, ProductRepository};
pub use crate::schema::{FieldErrors, ProductSchema, UnknownFields};

/*
    Typical flow inside a request handler:
    1. Build a `ProductCatalog` once at startup around an `Arc<dyn ProductRepository>`.
    2. Hand the raw JSON body to `catalog.create(&body)` / `catalog.update(id, &body)`.
    3. Map `CatalogError` to a response: Validation/BusinessRule -> 400, NotFound -> 404,
       Storage/Internal -> 500 (log the source, never send it to the client).
    4. Render the returned `Product` with `catalog.schema().dump(&product)?`.
*/
