// app/src/web/apidoc.rs

//! OpenAPI document and Swagger UI.
//!
//! Schemas come from the `ToSchema` derives on the core types (feature `openapi`)
//! and on the response bodies defined here in the app; paths from the
//! `#[utoipa::path]` annotations on the handlers.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::ErrorEnvelope;
use crate::web::handlers::meta_handlers::{self, HealthStatus};
use crate::web::handlers::product_handlers::{self, DeleteMessage};
use productos::{NewProduct, Product, ProductChanges};

/// Where the JSON document is served.
pub const API_DOC_PATH: &str = "/apispec_1.json";
/// Where the interactive UI is served.
pub const SWAGGER_UI_PATH: &str = "/apidocs/";

#[derive(OpenApi)]
#[openapi(
  info(
    title = "API de Productos",
    description = "CRUD de productos con validación de esquema."
  ),
  paths(
    product_handlers::create_product_handler,
    product_handlers::list_products_handler,
    product_handlers::get_product_handler,
    product_handlers::update_product_handler,
    product_handlers::delete_product_handler,
    meta_handlers::health_check_handler,
  ),
  components(schemas(Product, NewProduct, ProductChanges, ErrorEnvelope, DeleteMessage, HealthStatus)),
  tags(
    (name = "Productos", description = "Operaciones CRUD sobre productos."),
    (name = "Servicio", description = "Estado del servicio.")
  )
)]
pub struct ApiDoc;

/// Swagger UI under `/apidocs/`, also serving the document at [`API_DOC_PATH`].
pub fn swagger_ui() -> SwaggerUi {
  SwaggerUi::new(format!("{}{{_:.*}}", SWAGGER_UI_PATH)).url(API_DOC_PATH, ApiDoc::openapi())
}
