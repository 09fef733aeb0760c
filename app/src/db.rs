// app/src/db.rs

//! SQLite storage for the catalog and the startup helpers around it.

use crate::config::{AppConfig, StorageBackend};
use crate::errors::{AppError, Result as AppResult};
use async_trait::async_trait;
use productos::{
  CatalogError, CatalogResult, InMemoryProductRepository, NewProduct, Product, ProductCatalog, ProductChanges,
  ProductRepository,
};
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

pub const CREATE_PRODUCTOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
  id          INTEGER PRIMARY KEY AUTOINCREMENT,
  nombre      VARCHAR(100) NOT NULL,
  descripcion VARCHAR(255),
  precio      REAL NOT NULL,
  stock       INTEGER NOT NULL
)
"#;

const SELECT_COLUMNS: &str = "SELECT id, nombre, descripcion, precio, stock FROM productos";

#[derive(Debug, FromRow)]
struct ProductRow {
  id: i64,
  nombre: String,
  descripcion: Option<String>,
  precio: f64,
  stock: i64,
}

impl From<ProductRow> for Product {
  fn from(row: ProductRow) -> Self {
    Product {
      id: row.id,
      nombre: row.nombre,
      descripcion: row.descripcion,
      precio: row.precio,
      stock: row.stock,
    }
  }
}

// Logged once, when the error becomes a response.
fn storage_error(operation: &'static str) -> impl Fn(sqlx::Error) -> CatalogError {
  move |e| CatalogError::storage_during(operation, e)
}

/// `ProductRepository` over a sqlx SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
  pool: SqlitePool,
}

impl SqliteProductRepository {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
  async fn insert(&self, product: NewProduct) -> CatalogResult<Product> {
    let row: ProductRow = sqlx::query_as(
      "INSERT INTO productos (nombre, descripcion, precio, stock) VALUES (?, ?, ?, ?) \
       RETURNING id, nombre, descripcion, precio, stock",
    )
    .bind(&product.nombre)
    .bind(&product.descripcion)
    .bind(product.precio)
    .bind(product.stock)
    .fetch_one(&self.pool)
    .await
    .map_err(storage_error("insert"))?;
    Ok(row.into())
  }

  async fn list(&self) -> CatalogResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(&format!("{} ORDER BY id ASC", SELECT_COLUMNS))
      .fetch_all(&self.pool)
      .await
      .map_err(storage_error("list"))?;
    Ok(rows.into_iter().map(Product::from).collect())
  }

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await
      .map_err(storage_error("find"))?;
    Ok(row.map(Product::from))
  }

  async fn update(&self, id: i64, changes: &ProductChanges) -> CatalogResult<Option<Product>> {
    // Read and write inside one transaction so the row cannot change in between.
    let mut tx = self.pool.begin().await.map_err(storage_error("update.begin"))?;

    let row: Option<ProductRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_COLUMNS))
      .bind(id)
      .fetch_optional(&mut *tx)
      .await
      .map_err(storage_error("update.select"))?;

    let Some(row) = row else {
      tx.rollback().await.map_err(storage_error("update.rollback"))?;
      return Ok(None);
    };

    let mut product = Product::from(row);
    changes.apply_to(&mut product);

    sqlx::query("UPDATE productos SET nombre = ?, descripcion = ?, precio = ?, stock = ? WHERE id = ?")
      .bind(&product.nombre)
      .bind(&product.descripcion)
      .bind(product.precio)
      .bind(product.stock)
      .bind(product.id)
      .execute(&mut *tx)
      .await
      .map_err(storage_error("update.write"))?;

    tx.commit().await.map_err(storage_error("update.commit"))?;
    Ok(Some(product))
  }

  async fn delete(&self, id: i64) -> CatalogResult<bool> {
    let result = sqlx::query("DELETE FROM productos WHERE id = ?")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(storage_error("delete"))?;
    Ok(result.rows_affected() == 1)
  }

  async fn count(&self) -> CatalogResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM productos")
      .fetch_one(&self.pool)
      .await
      .map_err(storage_error("count"))
  }
}

/// Opens the SQLite pool, creating the database file (and its folder) if missing,
/// and makes sure the `productos` table exists.
#[instrument(name = "db::connect_sqlite", skip(database_url))]
pub async fn connect_sqlite(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
  let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
  let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

  if !in_memory {
    if let Some(parent) = options.get_filename().parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| AppError::Config(format!("Cannot create database folder {}: {}", parent.display(), e)))?;
    }
  }

  let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
  if in_memory {
    // An in-memory database lives only as long as a connection does.
    pool_options = pool_options.min_connections(1).idle_timeout(None::<Duration>).max_lifetime(None::<Duration>);
  }

  let pool = pool_options.connect_with(options).await?;
  sqlx::query(CREATE_PRODUCTOS_TABLE).execute(&pool).await?;
  info!(in_memory, "SQLite pool ready, productos table ensured.");
  Ok(pool)
}

/// Builds the repository selected by the configuration.
pub async fn build_repository(config: &AppConfig) -> AppResult<Arc<dyn ProductRepository>> {
  match &config.storage {
    StorageBackend::Sqlite(url) => {
      let pool = connect_sqlite(url, config.database_max_connections).await?;
      Ok(Arc::new(SqliteProductRepository::new(pool)))
    }
    StorageBackend::Memory => {
      info!("Using in-memory product store; data is lost on restart.");
      Ok(Arc::new(InMemoryProductRepository::new()))
    }
  }
}

/// Inserts a few sample products when the store is empty. Goes through the catalog
/// so the usual validation applies. Returns how many products were inserted.
#[instrument(name = "db::seed_products", skip(catalog))]
pub async fn seed_products(catalog: &ProductCatalog) -> AppResult<usize> {
  if catalog.repository().count().await? > 0 {
    info!("Store already has products; skipping seed.");
    return Ok(0);
  }

  let samples = [
    json!({"nombre": "Laptop Gamer Pro", "descripcion": "Laptop con RTX 4090 y 32GB RAM", "precio": 1999.99, "stock": 50}),
    json!({"nombre": "Teclado", "precio": 49.99, "stock": 120}),
    json!({"nombre": "Mouse inalámbrico", "descripcion": "Sensor óptico de 16000 DPI", "precio": 29.5, "stock": 200}),
  ];
  for sample in &samples {
    catalog.create(sample).await?;
  }
  info!("Seeded {} products.", samples.len());
  Ok(samples.len())
}
