// app/src/main.rs

use productos_app::config::AppConfig;
use productos_app::{build_app_state, init_tracing, web};

use actix_web::{web as actix_data, App, HttpServer};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      // No subscriber yet; report directly.
      eprintln!("Configuration error: {}", e);
      std::process::exit(1);
    }
  };

  init_tracing(app_config.log_format);
  tracing::info!("Starting product catalog server...");

  let server_address = app_config.bind_address();

  let app_state = match build_app_state(&app_config).await {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialize the product store.");
      std::process::exit(1);
    }
  };

  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
