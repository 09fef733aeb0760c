// app/src/web/handlers/mod.rs

// Declare handler modules
pub mod fallback_handlers;
pub mod meta_handlers;
pub mod product_handlers;
