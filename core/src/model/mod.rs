// core/src/model/mod.rs

//! Data structures representing the catalog entity and its column constraints.

pub mod product;

pub use product::{
  field, FieldSpec, NewProduct, Product, ProductChanges, DESCRIPCION_MAX_LEN, FIELDS, NOMBRE_MAX_LEN,
};
