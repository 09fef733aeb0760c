// tests/product_api_tests.rs
mod common;

use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::test::{self, TestRequest};
use async_trait::async_trait;
use productos::{
  CatalogError, CatalogResult, InMemoryProductRepository, NewProduct, Product, ProductCatalog, ProductChanges,
  ProductRepository,
};
use productos_app::state::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

async fn body_json(resp: actix_web::dev::ServiceResponse) -> Value {
  test::read_body_json(resp).await
}

fn is_json(resp: &actix_web::dev::ServiceResponse) -> bool {
  resp
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .map(|v| v.starts_with("application/json"))
    .unwrap_or(false)
}

#[actix_web::test]
async fn list_on_empty_store_is_an_empty_json_array() {
  let app = test_app!(common::test_state().await);

  let resp = test::call_service(&app, TestRequest::get().uri("/productos").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert!(is_json(&resp));
  assert_eq!(body_json(resp).await, json!([]));
}

#[actix_web::test]
async fn create_teclado_assigns_id_and_null_descripcion() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  assert!(is_json(&resp));

  let body = body_json(resp).await;
  assert!(body["id"].is_i64());
  assert_eq!(body["nombre"], "Teclado");
  assert_eq!(body["descripcion"], Value::Null);
  assert_eq!(body["precio"], json!(49.99));
  assert_eq!(body["stock"], json!(120));
}

#[actix_web::test]
async fn created_product_reads_back_identically() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::laptop_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let id = created["id"].as_i64().unwrap();

  let resp = test::call_service(&app, TestRequest::get().uri(&format!("/productos/{}", id)).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let fetched = body_json(resp).await;
  assert_eq!(fetched, created);

  let mut expected = common::laptop_payload();
  expected["id"] = json!(id);
  assert_eq!(fetched, expected);

  let list = body_json(test::call_service(&app, TestRequest::get().uri("/productos").to_request()).await).await;
  assert_eq!(list, json!([expected]));
}

#[actix_web::test]
async fn negative_values_are_rejected_and_nothing_is_stored() {
  let app = test_app!(common::test_state().await);

  for (payload, message) in [
    (json!({"nombre": "X", "precio": -1.0, "stock": 5}), "El precio no puede ser negativo"),
    (json!({"nombre": "X", "precio": 1.0, "stock": -5}), "El stock no puede ser negativo"),
  ] {
    let req = TestRequest::post().uri("/productos").set_json(payload).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
      body_json(resp).await,
      json!({"error": message, "codigo": "ReglaDeNegocio"})
    );
  }

  let list = body_json(test::call_service(&app, TestRequest::get().uri("/productos").to_request()).await).await;
  assert_eq!(list, json!([]));
}

#[actix_web::test]
async fn structural_errors_use_the_validation_envelope() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post()
    .uri("/productos")
    .set_json(json!({"precio": "caro", "stock": 1, "color": "rojo"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let body = body_json(resp).await;
  assert_eq!(body["error"], "Datos de entrada inválidos");
  assert_eq!(body["codigo"], "DatosInvalidos");
  assert_eq!(body["mensajes"]["nombre"], json!(["Missing data for required field."]));
  assert_eq!(body["mensajes"]["precio"], json!(["Not a valid number."]));
  assert_eq!(body["mensajes"]["color"], json!(["Unknown field."]));
}

#[actix_web::test]
async fn get_missing_product_is_404_envelope() {
  let app = test_app!(common::test_state().await);

  let resp = test::call_service(&app, TestRequest::get().uri("/productos/99999").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert!(is_json(&resp));
  assert_eq!(
    body_json(resp).await,
    json!({"error": "Producto no encontrado", "codigo": "RecursoNoEncontrado"})
  );
}

#[actix_web::test]
async fn non_integer_id_is_an_unknown_route() {
  let app = test_app!(common::test_state().await);

  let resp = test::call_service(&app, TestRequest::get().uri("/productos/abc").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body = body_json(resp).await;
  assert_eq!(body["codigo"], "RecursoNoEncontrado");
  assert_eq!(body["error"], "El recurso solicitado no fue encontrado en la API.");
}

#[actix_web::test]
async fn partial_update_only_touches_sent_fields() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post()
    .uri("/productos")
    .set_json(json!({"nombre": "A", "precio": 10, "stock": 5}))
    .to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let uri = format!("/productos/{}", created["id"]);

  let req = TestRequest::put().uri(&uri).set_json(json!({"precio": 12})).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated = body_json(resp).await;
  assert_eq!(updated["nombre"], "A");
  assert_eq!(updated["precio"].as_f64(), Some(12.0));
  assert_eq!(updated["stock"], json!(5));

  let fetched = body_json(test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await).await;
  assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn update_is_all_or_nothing() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let uri = format!("/productos/{}", created["id"]);

  for payload in [
    json!({"nombre": "Nuevo", "precio": "no-numero"}),
    json!({"nombre": "Nuevo", "stock": -1}),
  ] {
    let req = TestRequest::put().uri(&uri).set_json(payload).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  let fetched = body_json(test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await).await;
  assert_eq!(fetched, created);
}

#[actix_web::test]
async fn update_ignores_unknown_fields_and_can_clear_descripcion() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::laptop_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let uri = format!("/productos/{}", created["id"]);

  let req = TestRequest::put()
    .uri(&uri)
    .set_json(json!({"descripcion": null, "id": 424242, "color": "rojo"}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated = body_json(resp).await;
  assert_eq!(updated["id"], created["id"]);
  assert_eq!(updated["descripcion"], Value::Null);
  assert!(updated.get("color").is_none());
}

#[actix_web::test]
async fn update_of_missing_product_is_404_even_with_bad_payload() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::put()
    .uri("/productos/99999")
    .set_json(json!({"precio": -3}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await["error"], "Producto no encontrado");
}

#[actix_web::test]
async fn update_of_missing_product_is_404_before_the_body_is_read() {
  let app = test_app!(common::test_state().await);

  let unreadable = TestRequest::put()
    .uri("/productos/99999")
    .insert_header(ContentType::json())
    .set_payload("{\"precio\": ")
    .to_request();
  let without_body = TestRequest::put().uri("/productos/99999").to_request();

  for req in [unreadable, without_body] {
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
      body_json(resp).await,
      json!({"error": "Producto no encontrado", "codigo": "RecursoNoEncontrado"})
    );
  }
}

#[actix_web::test]
async fn update_of_existing_product_with_unreadable_body_is_a_bad_request() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let uri = format!("/productos/{}", created["id"]);

  let malformed = TestRequest::put()
    .uri(&uri)
    .insert_header(ContentType::json())
    .set_payload("{\"precio\": ")
    .to_request();
  let wrong_type = TestRequest::put()
    .uri(&uri)
    .insert_header(ContentType::plaintext())
    .set_payload(json!({"precio": 1}).to_string())
    .to_request();

  for req in [malformed, wrong_type] {
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["codigo"], "SolicitudIncorrecta");
  }

  let fetched = body_json(test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await).await;
  assert_eq!(fetched, created);
}

/// In-memory store whose writes on update always fail.
struct BrokenUpdates {
  inner: InMemoryProductRepository,
}

#[async_trait]
impl ProductRepository for BrokenUpdates {
  async fn insert(&self, product: NewProduct) -> CatalogResult<Product> {
    self.inner.insert(product).await
  }

  async fn list(&self) -> CatalogResult<Vec<Product>> {
    self.inner.list().await
  }

  async fn find(&self, id: i64) -> CatalogResult<Option<Product>> {
    self.inner.find(id).await
  }

  async fn update(&self, _id: i64, _changes: &ProductChanges) -> CatalogResult<Option<Product>> {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk I/O error at /var/lib/productos/productos.db");
    Err(CatalogError::storage_during("update.write", io))
  }

  async fn delete(&self, id: i64) -> CatalogResult<bool> {
    self.inner.delete(id).await
  }
}

#[actix_web::test]
async fn storage_failure_during_update_is_an_opaque_500() {
  let repository = Arc::new(BrokenUpdates {
    inner: InMemoryProductRepository::new(),
  });
  let app = test_app!(AppState::new(ProductCatalog::new(repository)));

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;

  let req = TestRequest::put()
    .uri(&format!("/productos/{}", created["id"]))
    .set_json(json!({"precio": 12}))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert!(is_json(&resp));

  let body = body_json(resp).await;
  assert_eq!(
    body,
    json!({"error": "Ha ocurrido un error inesperado en el servidor.", "codigo": "ErrorInternoDelServidor"})
  );
  assert!(!body.to_string().contains("/var/lib"));
}

#[actix_web::test]
async fn head_is_answered_on_get_routes() {
  let app = test_app!(common::test_state().await);

  for uri in ["/productos", "/health"] {
    let resp = test::call_service(&app, TestRequest::default().method(Method::HEAD).uri(uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK, "HEAD {}", uri);
  }

  let resp = test::call_service(
    &app,
    TestRequest::default().method(Method::HEAD).uri("/productos/99999").to_request(),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_twice_is_404_the_second_time() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let created = body_json(test::call_service(&app, req).await).await;
  let uri = format!("/productos/{}", created["id"]);

  let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(
    body_json(resp).await,
    json!({"mensaje": "Producto eliminado correctamente"})
  );

  for _ in 0..2 {
    let resp = test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn ids_are_not_reused_after_delete() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let first = body_json(test::call_service(&app, req).await).await["id"].as_i64().unwrap();
  let resp = test::call_service(&app, TestRequest::delete().uri(&format!("/productos/{}", first)).to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);

  let req = TestRequest::post().uri("/productos").set_json(common::teclado_payload()).to_request();
  let second = body_json(test::call_service(&app, req).await).await["id"].as_i64().unwrap();
  assert!(second > first);
}

#[actix_web::test]
async fn malformed_body_is_a_bad_request() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post()
    .uri("/productos")
    .insert_header(ContentType::json())
    .set_payload("{\"nombre\": ")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    body_json(resp).await,
    json!({"error": "La solicitud es incorrecta o malformada.", "codigo": "SolicitudIncorrecta"})
  );

  // Valid JSON text, wrong content type.
  let req = TestRequest::post()
    .uri("/productos")
    .insert_header(ContentType::plaintext())
    .set_payload(common::teclado_payload().to_string())
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["codigo"], "SolicitudIncorrecta");
}

#[actix_web::test]
async fn non_object_body_is_a_validation_error() {
  let app = test_app!(common::test_state().await);

  let req = TestRequest::post().uri("/productos").set_json(json!([1, 2, 3])).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = body_json(resp).await;
  assert_eq!(body["codigo"], "DatosInvalidos");
  assert_eq!(body["mensajes"]["_schema"], json!(["Invalid input type."]));
}

#[actix_web::test]
async fn wrong_verb_is_405_envelope() {
  let app = test_app!(common::test_state().await);

  for req in [
    TestRequest::patch().uri("/productos").to_request(),
    TestRequest::delete().uri("/productos").to_request(),
    TestRequest::post().uri("/productos/1").to_request(),
  ] {
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(is_json(&resp));
    assert_eq!(
      body_json(resp).await,
      json!({
        "error": "El método HTTP no está permitido para la URL solicitada.",
        "codigo": "MetodoNoPermitido"
      })
    );
  }
}

#[actix_web::test]
async fn unknown_route_is_404_envelope() {
  let app = test_app!(common::test_state().await);

  let resp = test::call_service(&app, TestRequest::get().uri("/no-existe").to_request()).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    body_json(resp).await,
    json!({
      "error": "El recurso solicitado no fue encontrado en la API.",
      "codigo": "RecursoNoEncontrado"
    })
  );
}

#[actix_web::test]
async fn health_reports_ok() {
  let app = test_app!(common::test_state().await);

  let resp = test::call_service(&app, TestRequest::get().uri("/health").to_request()).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await, json!({"status": "ok"}));
}
