// core/src/schema/loader.rs

//! Structural validation of inbound JSON payloads.

use super::{messages, FieldErrors, ProductSchema, UnknownFields, SCHEMA_KEY};
use crate::model::{field, FieldSpec, NewProduct, ProductChanges, FIELDS};
use serde_json::{Map, Number, Value};
use tracing::{event, Level};

impl ProductSchema {
  /// Validates a full create payload and builds an unsaved product.
  ///
  /// `nombre`, `precio` and `stock` are required; `descripcion` may be missing or null.
  /// Non-negativity is NOT checked here.
  pub fn load(&self, payload: &Value) -> Result<NewProduct, FieldErrors> {
    let (changes, mut errors) = self.read_fields(payload)?;

    for spec in FIELDS.iter().filter(|f| f.required && !f.read_only) {
      let present = payload.get(spec.name).is_some();
      if !present {
        errors.add(spec.name, messages::MISSING);
      }
    }

    if !errors.is_empty() {
      event!(Level::DEBUG, fields = errors.len(), "Create payload rejected by schema.");
      return Err(errors);
    }

    match changes {
      ProductChanges {
        nombre: Some(nombre),
        descripcion,
        precio: Some(precio),
        stock: Some(stock),
      } => Ok(NewProduct {
        nombre,
        descripcion: descripcion.flatten(),
        precio,
        stock,
      }),
      // Every required field was either read or reported above.
      _ => Err(FieldErrors::single(SCHEMA_KEY, messages::INVALID_INPUT)),
    }
  }

  /// Validates a partial update payload. Only the keys present are checked.
  ///
  /// An empty object is valid and yields an empty change set.
  pub fn load_changes(&self, payload: &Value) -> Result<ProductChanges, FieldErrors> {
    let (changes, errors) = self.read_fields(payload)?;
    if !errors.is_empty() {
      event!(Level::DEBUG, fields = errors.len(), "Update payload rejected by schema.");
      return Err(errors);
    }
    Ok(changes)
  }

  /// Reads every writable field present in `payload`, collecting errors instead of
  /// stopping at the first one. Fails outright only when the payload is not an object.
  fn read_fields(&self, payload: &Value) -> Result<(ProductChanges, FieldErrors), FieldErrors> {
    let object = as_object(payload)?;
    let mut changes = ProductChanges::default();
    let mut errors = FieldErrors::new();

    if self.unknown == UnknownFields::Raise {
      for key in object.keys() {
        if field(key).map_or(true, |spec| spec.read_only) {
          errors.add(key.as_str(), messages::UNKNOWN);
        }
      }
    }

    for spec in FIELDS.iter().filter(|f| !f.read_only) {
      let Some(value) = object.get(spec.name) else {
        continue;
      };
      let outcome = match spec.name {
        "nombre" => read_string(spec, value).map(|v| changes.nombre = v),
        "descripcion" => read_string(spec, value).map(|v| changes.descripcion = Some(v)),
        "precio" => read_number(spec, value).map(|v| changes.precio = v),
        "stock" => read_integer(spec, value).map(|v| changes.stock = v),
        _ => Ok(()),
      };
      if let Err(message) = outcome {
        errors.add(spec.name, message);
      }
    }

    Ok((changes, errors))
  }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, FieldErrors> {
  payload
    .as_object()
    .ok_or_else(|| FieldErrors::single(SCHEMA_KEY, messages::INVALID_INPUT))
}

/// `Ok(None)` only for an accepted null on a nullable column.
fn read_null<T>(spec: &FieldSpec) -> Result<Option<T>, String> {
  if spec.nullable {
    Ok(None)
  } else {
    Err(messages::NULL.to_string())
  }
}

fn read_string(spec: &FieldSpec, value: &Value) -> Result<Option<String>, String> {
  let text = match value {
    Value::Null => return read_null(spec),
    Value::String(s) => s,
    _ => return Err(messages::NOT_STRING.to_string()),
  };

  let len = text.chars().count();
  if let Some(min) = spec.min_len {
    if len < min {
      return Err(messages::too_short(min));
    }
  }
  if let Some(max) = spec.max_len {
    if len > max {
      return Err(messages::too_long(max));
    }
  }
  Ok(Some(text.clone()))
}

fn read_number(spec: &FieldSpec, value: &Value) -> Result<Option<f64>, String> {
  match value {
    Value::Null => read_null(spec),
    Value::Number(n) => n
      .as_f64()
      .filter(|f| f.is_finite())
      .map(Some)
      .ok_or_else(|| messages::NOT_NUMBER.to_string()),
    _ => Err(messages::NOT_NUMBER.to_string()),
  }
}

fn read_integer(spec: &FieldSpec, value: &Value) -> Result<Option<i64>, String> {
  match value {
    Value::Null => read_null(spec),
    Value::Number(n) => integral(n).map(Some).ok_or_else(|| messages::NOT_INTEGER.to_string()),
    _ => Err(messages::NOT_INTEGER.to_string()),
  }
}

/// Accepts `5` and `5.0`, rejects `5.5` and anything outside the i64 range.
fn integral(n: &Number) -> Option<i64> {
  if let Some(i) = n.as_i64() {
    return Some(i);
  }
  if n.is_u64() {
    return None;
  }
  let f = n.as_f64()?;
  if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
    Some(f as i64)
  } else {
    None
  }
}
