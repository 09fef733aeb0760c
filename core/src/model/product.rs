// core/src/model/product.rs

use serde::{Deserialize, Serialize};

/// Maximum length, in characters, of `Product::nombre`.
pub const NOMBRE_MAX_LEN: usize = 100;
/// Maximum length, in characters, of `Product::descripcion`.
pub const DESCRIPCION_MAX_LEN: usize = 255;

/// A persisted catalog product (table `productos`).
///
/// Field order is the wire order: serde emits struct fields in declaration order,
/// so responses always read `id, nombre, descripcion, precio, stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = Producto))]
pub struct Product {
  /// Identificador asignado por la base de datos.
  #[cfg_attr(feature = "openapi", schema(read_only, example = 1))]
  pub id: i64,
  /// Nombre del producto.
  #[cfg_attr(feature = "openapi", schema(min_length = 1, max_length = 100, example = "Teclado"))]
  pub nombre: String,
  /// Descripción detallada del producto (opcional).
  #[cfg_attr(feature = "openapi", schema(max_length = 255))]
  pub descripcion: Option<String>, // Serialized as `null` when absent
  /// Precio del producto.
  #[cfg_attr(feature = "openapi", schema(minimum = 0, example = 49.99))]
  pub precio: f64,
  /// Cantidad de unidades en stock.
  #[cfg_attr(feature = "openapi", schema(minimum = 0, example = 120))]
  pub stock: i64,
}

/// A validated product that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = ProductoNuevo))]
pub struct NewProduct {
  #[cfg_attr(feature = "openapi", schema(min_length = 1, max_length = 100, example = "Teclado"))]
  pub nombre: String,
  #[cfg_attr(feature = "openapi", schema(max_length = 255))]
  pub descripcion: Option<String>,
  #[cfg_attr(feature = "openapi", schema(minimum = 0, example = 49.99))]
  pub precio: f64,
  #[cfg_attr(feature = "openapi", schema(minimum = 0, example = 120))]
  pub stock: i64,
}

impl NewProduct {
  /// Materializes the stored row once the store handed out an id.
  pub fn into_product(self, id: i64) -> Product {
    Product {
      id,
      nombre: self.nombre,
      descripcion: self.descripcion,
      precio: self.precio,
      stock: self.stock,
    }
  }
}

/// The subset of fields a partial update touches.
///
/// `None` means "not sent". For `descripcion` the inner option distinguishes
/// "sent as null" (`Some(None)`, clears the column) from "not sent" (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema), schema(as = ProductoCambios))]
pub struct ProductChanges {
  #[cfg_attr(feature = "openapi", schema(min_length = 1, max_length = 100))]
  pub nombre: Option<String>,
  /// `null` borra la descripción.
  #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, max_length = 255))]
  pub descripcion: Option<Option<String>>,
  #[cfg_attr(feature = "openapi", schema(minimum = 0))]
  pub precio: Option<f64>,
  #[cfg_attr(feature = "openapi", schema(minimum = 0))]
  pub stock: Option<i64>,
}

impl ProductChanges {
  /// True when the payload carried no writable field at all.
  pub fn is_empty(&self) -> bool {
    self.nombre.is_none() && self.descripcion.is_none() && self.precio.is_none() && self.stock.is_none()
  }

  /// Names of the fields this change set carries, in declaration order.
  pub fn field_names(&self) -> Vec<&'static str> {
    let mut names = Vec::with_capacity(4);
    if self.nombre.is_some() {
      names.push("nombre");
    }
    if self.descripcion.is_some() {
      names.push("descripcion");
    }
    if self.precio.is_some() {
      names.push("precio");
    }
    if self.stock.is_some() {
      names.push("stock");
    }
    names
  }

  /// Copies every present field onto `product`. `id` is never touched.
  pub fn apply_to(&self, product: &mut Product) {
    if let Some(nombre) = &self.nombre {
      product.nombre = nombre.clone();
    }
    if let Some(descripcion) = &self.descripcion {
      product.descripcion = descripcion.clone();
    }
    if let Some(precio) = self.precio {
      product.precio = precio;
    }
    if let Some(stock) = self.stock {
      product.stock = stock;
    }
  }
}

/// Structural constraints of one `productos` column, as enforced by the schema loader.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
  pub name: &'static str,
  pub required: bool,
  pub nullable: bool,
  pub min_len: Option<usize>,
  pub max_len: Option<usize>,
  /// Generated by the store; never accepted from clients.
  pub read_only: bool,
}

/// Column constraints of `Product`, in declaration order.
pub static FIELDS: [FieldSpec; 5] = [
  FieldSpec {
    name: "id",
    required: false,
    nullable: false,
    min_len: None,
    max_len: None,
    read_only: true,
  },
  FieldSpec {
    name: "nombre",
    required: true,
    nullable: false,
    min_len: Some(1),
    max_len: Some(NOMBRE_MAX_LEN),
    read_only: false,
  },
  FieldSpec {
    name: "descripcion",
    required: false,
    nullable: true,
    min_len: None,
    max_len: Some(DESCRIPCION_MAX_LEN),
    read_only: false,
  },
  FieldSpec {
    name: "precio",
    required: true,
    nullable: false,
    min_len: None,
    max_len: None,
    read_only: false,
  },
  FieldSpec {
    name: "stock",
    required: true,
    nullable: false,
    min_len: None,
    max_len: None,
    read_only: false,
  },
];

/// Looks up a column by name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
  FIELDS.iter().find(|f| f.name == name)
}
