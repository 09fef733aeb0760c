// app/src/web/routes.rs

use actix_web::{guard, web, Route};

use crate::web::apidoc;
use crate::web::handlers::fallback_handlers::{
  json_error_handler, method_not_allowed_handler, path_error_handler, route_not_found_handler,
};
use crate::web::handlers::{meta_handlers, product_handlers};

// GET routes also answer HEAD; the server drops the body.
fn get_or_head() -> Route {
  web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

// Called from `main.rs` (and the integration tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    // Health Check Route
    .route("/health", get_or_head().to(meta_handlers::health_check_handler))
    // API documentation: /apispec_1.json and the Swagger UI under /apidocs/
    .service(apidoc::swagger_ui())
    // Product Routes
    .service(
      web::resource("/productos")
        .route(get_or_head().to(product_handlers::list_products_handler))
        .route(web::post().to(product_handlers::create_product_handler))
        .default_service(web::to(method_not_allowed_handler)),
    )
    .service(
      web::resource("/productos/{id}")
        .route(get_or_head().to(product_handlers::get_product_handler))
        .route(web::put().to(product_handlers::update_product_handler))
        .route(web::delete().to(product_handlers::delete_product_handler))
        .default_service(web::to(method_not_allowed_handler)),
    )
    .default_service(web::to(route_not_found_handler));
}
