// app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use productos::{NewProduct, Product, ProductChanges};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::errors::{AppError, ErrorEnvelope};
use crate::state::AppState;

pub const PRODUCTO_ELIMINADO: &str = "Producto eliminado correctamente";

/// Body of a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessage {
  #[schema(example = "Producto eliminado correctamente")]
  pub mensaje: String,
}

#[utoipa::path(
  post,
  path = "/productos",
  tag = "Productos",
  operation_id = "crear_producto",
  request_body = NewProduct,
  responses(
    (status = 201, description = "Producto creado.", body = Product),
    (status = 400, description = "Error de validación o de regla de negocio.", body = ErrorEnvelope),
    (status = 500, description = "Error inesperado en el servidor.", body = ErrorEnvelope)
  )
)]
#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  let catalog = &app_state.catalog;
  let product = catalog.create(&payload).await?;

  info!(product_id = product.id, "Product created via API.");
  Ok(HttpResponse::Created().json(catalog.schema().dump(&product)?))
}

#[utoipa::path(
  get,
  path = "/productos",
  tag = "Productos",
  operation_id = "obtener_productos",
  responses(
    (status = 200, description = "Todos los productos.", body = Vec<Product>),
    (status = 500, description = "Error inesperado en el servidor.", body = ErrorEnvelope)
  )
)]
#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let catalog = &app_state.catalog;
  let products = catalog.list().await?;
  Ok(HttpResponse::Ok().json(catalog.schema().dump_many(&products)?))
}

#[utoipa::path(
  get,
  path = "/productos/{id}",
  tag = "Productos",
  operation_id = "obtener_producto",
  params(("id" = i64, Path, description = "Identificador del producto")),
  responses(
    (status = 200, description = "El producto.", body = Product),
    (status = 404, description = "Producto no encontrado.", body = ErrorEnvelope),
    (status = 500, description = "Error inesperado en el servidor.", body = ErrorEnvelope)
  )
)]
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let catalog = &app_state.catalog;
  let product = catalog.get(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(catalog.schema().dump(&product)?))
}

/// The body is taken raw so the id lookup runs before anything looks at it.
#[utoipa::path(
  put,
  path = "/productos/{id}",
  tag = "Productos",
  operation_id = "actualizar_producto",
  params(("id" = i64, Path, description = "Identificador del producto")),
  request_body = ProductChanges,
  responses(
    (status = 200, description = "Producto actualizado; solo cambian los campos enviados.", body = Product),
    (status = 400, description = "Error de validación o de regla de negocio.", body = ErrorEnvelope),
    (status = 404, description = "Producto no encontrado.", body = ErrorEnvelope),
    (status = 500, description = "Error inesperado en el servidor.", body = ErrorEnvelope)
  )
)]
#[instrument(name = "handler::update_product", skip(app_state, path, req, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  req: HttpRequest,
  body: web::Bytes,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  let catalog = &app_state.catalog;

  catalog.get(product_id).await?;
  let payload = read_json_body(&req, &body)?;

  let product = catalog.update(product_id, &payload).await?;
  info!("Product {} updated via API.", product_id);
  Ok(HttpResponse::Ok().json(catalog.schema().dump(&product)?))
}

#[utoipa::path(
  delete,
  path = "/productos/{id}",
  tag = "Productos",
  operation_id = "eliminar_producto",
  params(("id" = i64, Path, description = "Identificador del producto")),
  responses(
    (status = 200, description = "Producto eliminado.", body = DeleteMessage),
    (status = 404, description = "Producto no encontrado.", body = ErrorEnvelope),
    (status = 500, description = "Error inesperado en el servidor.", body = ErrorEnvelope)
  )
)]
#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.catalog.delete(product_id).await?;
  info!("Product {} deleted via API.", product_id);
  Ok(HttpResponse::Ok().json(DeleteMessage {
    mensaje: PRODUCTO_ELIMINADO.to_string(),
  }))
}

/// Same acceptance rules as `web::Json`: a JSON content type and a parseable body.
fn read_json_body(req: &HttpRequest, body: &[u8]) -> Result<Value, AppError> {
  let content_type = req.content_type();
  let is_json = content_type.eq_ignore_ascii_case("application/json") || content_type.ends_with("+json");
  if !is_json {
    return Err(AppError::BadRequest(format!(
      "expected a JSON body, got content type '{}'",
      content_type
    )));
  }
  serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Json deserialize error: {}", e)))
}
