// app/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use productos::{CatalogError, FieldErrors};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use utoipa::ToSchema;

pub const PRODUCTO_NO_ENCONTRADO: &str = "Producto no encontrado";
pub const DATOS_INVALIDOS: &str = "Datos de entrada inválidos";
pub const SOLICITUD_INCORRECTA: &str = "La solicitud es incorrecta o malformada.";
pub const RECURSO_NO_ENCONTRADO: &str = "El recurso solicitado no fue encontrado en la API.";
pub const METODO_NO_PERMITIDO: &str = "El método HTTP no está permitido para la URL solicitada.";
pub const ERROR_INTERNO: &str = "Ha ocurrido un error inesperado en el servidor.";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Catalog Error: {0}")]
  Catalog(#[from] CatalogError),

  /// Body could not be read as JSON (syntax error, wrong content type, too large...).
  #[error("Bad Request: {0}")]
  BadRequest(String),

  #[error("Route Not Found: {0}")]
  RouteNotFound(String),

  #[error("Method Not Allowed: {0}")]
  MethodNotAllowed(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),
}

/// The one error body every failing response uses.
///
/// `mensajes` is present only for structural validation failures.
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = Error)]
pub struct ErrorEnvelope {
  /// Mensaje legible.
  #[schema(example = "Producto no encontrado")]
  pub error: String,
  /// Código estable: DatosInvalidos, ReglaDeNegocio, SolicitudIncorrecta,
  /// RecursoNoEncontrado, MetodoNoPermitido o ErrorInternoDelServidor.
  #[schema(value_type = String, example = "RecursoNoEncontrado")]
  pub codigo: &'static str,
  /// Mensajes por campo; solo en errores de validación estructural.
  #[serde(skip_serializing_if = "Option::is_none")]
  #[schema(value_type = Option<HashMap<String, Vec<String>>>)]
  pub mensajes: Option<FieldErrors>,
}

impl AppError {
  /// Stable machine-readable code placed in `codigo`.
  pub fn code(&self) -> &'static str {
    match self {
      AppError::Catalog(CatalogError::Validation(_)) => "DatosInvalidos",
      AppError::Catalog(CatalogError::BusinessRule(_)) => "ReglaDeNegocio",
      AppError::Catalog(CatalogError::NotFound { .. }) | AppError::RouteNotFound(_) => "RecursoNoEncontrado",
      AppError::BadRequest(_) => "SolicitudIncorrecta",
      AppError::MethodNotAllowed(_) => "MetodoNoPermitido",
      AppError::Catalog(CatalogError::Storage { .. })
      | AppError::Catalog(CatalogError::Internal(_))
      | AppError::Config(_)
      | AppError::Sqlx(_) => "ErrorInternoDelServidor",
    }
  }

  pub fn envelope(&self) -> ErrorEnvelope {
    let (error, mensajes) = match self {
      AppError::Catalog(CatalogError::Validation(errors)) => (DATOS_INVALIDOS.to_string(), Some(errors.clone())),
      AppError::Catalog(CatalogError::BusinessRule(m)) => (m.clone(), None),
      AppError::Catalog(CatalogError::NotFound { .. }) => (PRODUCTO_NO_ENCONTRADO.to_string(), None),
      AppError::BadRequest(_) => (SOLICITUD_INCORRECTA.to_string(), None),
      AppError::RouteNotFound(_) => (RECURSO_NO_ENCONTRADO.to_string(), None),
      AppError::MethodNotAllowed(_) => (METODO_NO_PERMITIDO.to_string(), None),
      // Internals never leave the server.
      _ => (ERROR_INTERNO.to_string(), None),
    };
    ErrorEnvelope {
      error,
      codigo: self.code(),
      mensajes,
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Catalog(CatalogError::Validation(_))
      | AppError::Catalog(CatalogError::BusinessRule(_))
      | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Catalog(CatalogError::NotFound { .. }) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
      AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with server error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }
    HttpResponse::build(status).json(self.envelope())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
