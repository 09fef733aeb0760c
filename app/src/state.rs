// app/src/state.rs
use productos::ProductCatalog;

/// Everything a handler needs, injected through `web::Data<AppState>`.
#[derive(Clone, Debug)]
pub struct AppState {
  pub catalog: ProductCatalog, // Holds the repository handle and the schema instances
}

impl AppState {
  pub fn new(catalog: ProductCatalog) -> Self {
    Self { catalog }
  }
}
