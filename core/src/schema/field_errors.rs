// core/src/schema/field_errors.rs

use serde::Serialize;
use std::collections::BTreeMap;

/// Key used for errors that concern the payload as a whole rather than one field.
pub const SCHEMA_KEY: &str = "_schema";

/// Field name -> list of messages collected during structural validation.
///
/// Serializes as a plain JSON object, e.g. `{"nombre": ["Missing data for required field."]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a single-entry map; handy for payload-level failures.
  pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
    let mut errors = Self::new();
    errors.add(field, message);
    errors
  }

  pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.0.entry(field.into()).or_default().push(message.into());
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Number of fields with at least one message.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn get(&self, field: &str) -> Option<&[String]> {
    self.0.get(field).map(Vec::as_slice)
  }
}
