// app/src/web/handlers/meta_handlers.rs

use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
  #[schema(value_type = String, example = "ok")]
  pub status: &'static str,
}

// Liveness only; it does not touch the store.
#[utoipa::path(
  get,
  path = "/health",
  tag = "Servicio",
  operation_id = "health",
  responses((status = 200, description = "El servicio está en marcha.", body = HealthStatus))
)]
pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthStatus { status: "ok" })
}
