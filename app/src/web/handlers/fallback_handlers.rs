// app/src/web/handlers/fallback_handlers.rs

//! Handlers and extractor error hooks that turn framework-level failures into
//! the same JSON envelope the catalog errors use.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::errors::AppError;

/// Default service for paths no resource matches.
pub async fn route_not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::RouteNotFound(req.path().to_string()))
}

/// Default service of each resource: the path exists but not with this verb.
pub async fn method_not_allowed_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  Err(AppError::MethodNotAllowed(format!("{} {}", req.method(), req.path())))
}

/// Body that is not JSON, has the wrong content type, or is too large.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
  debug!(path = %req.path(), error = %err, "Rejecting unreadable JSON body.");
  AppError::BadRequest(err.to_string()).into()
}

/// `{id}` that is not an integer: the route does not exist for it.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
  debug!(path = %req.path(), error = %err, "Path parameter did not match.");
  AppError::RouteNotFound(req.path().to_string()).into()
}
