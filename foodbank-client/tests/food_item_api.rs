// foodbank-client/tests/food_item_api.rs
// Runs FoodItemApi against an in-process stub of the inventory API

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use foodbank_client::{ClientConfig, ClientError, FoodItem, FoodItemApi, FoodItemGateway};
use rust_decimal::Decimal;
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Backend {
    /// Body returned by `GET /api/FoodItemApi`
    listing: Arc<Mutex<Value>>,
    /// Every request body and authorization header seen
    received: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

impl Backend {
    fn record(&self, what: String, headers: &HeaderMap, body: Value) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.received.lock().unwrap().push((what, auth, body));
    }
}

fn milk() -> Value {
    json!({
        "foodItemId": 2,
        "name": "Whole Milk",
        "category": "Dairy",
        "brand": "Valley",
        "description": null,
        "price": 2.49,
        "unit": "gallon",
        "quantityInStock": 12,
        "expirationDate": "2024-06-01T00:00:00",
        "isPerishable": true,
        "caloriesPerServing": 150,
        "ingredients": "milk",
        "barcode": "0002",
        "supplier": "Valley Dairy",
        "dateAdded": "2024-05-01T09:30:00.1234567",
        "isActive": true,
        "roleId": 1
    })
}

async fn list(State(b): State<Backend>, headers: HeaderMap) -> Json<Value> {
    b.record("GET list".into(), &headers, Value::Null);
    Json(b.listing.lock().unwrap().clone())
}

async fn create(State(b): State<Backend>, headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    b.record("POST".into(), &headers, body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn get_one(Path(id): Path<i32>) -> Result<Json<Value>, (StatusCode, &'static str)> {
    match id {
        2 => Ok(Json(milk())),
        500 => Err((StatusCode::INTERNAL_SERVER_ERROR, "database offline")),
        _ => Err((StatusCode::NOT_FOUND, "no such item")),
    }
}

async fn update(
    State(b): State<Backend>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    b.record(format!("PUT {id}"), &headers, body);
    StatusCode::NO_CONTENT
}

async fn delete(State(b): State<Backend>, Path(id): Path<i32>, headers: HeaderMap) -> StatusCode {
    if id == 400 {
        return StatusCode::BAD_REQUEST;
    }
    b.record(format!("DELETE {id}"), &headers, Value::Null);
    StatusCode::NO_CONTENT
}

async fn spawn_backend(backend: Backend) -> String {
    let app = Router::new()
        .route("/api/FoodItemApi", get(list).post(create))
        .route("/api/FoodItemApi/{id}", get(get_one).put(update).delete(delete))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/", addr)
}

async fn api(backend: &Backend) -> FoodItemApi<foodbank_client::NetworkHttpClient> {
    let base = spawn_backend(backend.clone()).await;
    FoodItemApi::from_config(&ClientConfig::new(base).with_token("t0ken")).unwrap()
}

#[tokio::test]
async fn test_list_decodes_items() {
    let backend = Backend::default();
    *backend.listing.lock().unwrap() = json!([milk()]);
    let api = api(&backend).await;

    let items = api.list().await.unwrap();
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, 2);
    assert_eq!(item.description, "");
    assert_eq!(item.price, "2.49".parse::<Decimal>().unwrap());
    assert_eq!(item.expiration_date, NaiveDate::from_ymd_opt(2024, 6, 1));

    let received = backend.received.lock().unwrap();
    assert_eq!(received[0].1.as_deref(), Some("Bearer t0ken"));
}

#[tokio::test]
async fn test_null_listing_is_empty() {
    let backend = Backend::default();
    let api = api(&backend).await;
    assert!(api.list().await.unwrap().is_empty());
    assert_eq!(api.list_raw().await.unwrap(), "null");
}

#[tokio::test]
async fn test_get_maps_status_codes() {
    let backend = Backend::default();
    let api = api(&backend).await;

    assert_eq!(api.get(2).await.unwrap().name, "Whole Milk");

    let err = api.get(7).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref body) if body == "no such item"));

    let err = api.get(500).await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_update_delete_send_payloads() {
    let backend = Backend::default();
    let api = api(&backend).await;
    let item: FoodItem = serde_json::from_value(milk()).unwrap();

    api.create(&item).await.unwrap();
    api.update(2, &item).await.unwrap();
    api.delete(2).await.unwrap();

    let received = backend.received.lock().unwrap();
    let calls: Vec<_> = received.iter().map(|(what, _, _)| what.as_str()).collect();
    assert_eq!(calls, ["POST", "PUT 2", "DELETE 2"]);

    let posted = &received[0].2;
    assert_eq!(posted["foodItemId"], 2);
    assert_eq!(posted["price"], 2.49);
    assert_eq!(posted["expirationDate"], "2024-06-01");
    assert_eq!(posted["description"], "");
}

#[tokio::test]
async fn test_rejected_delete_is_validation_error() {
    let backend = Backend::default();
    let api = api(&backend).await;
    let err = api.delete(400).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = FoodItemApi::from_config(&ClientConfig::new(format!("http://{addr}/api"))).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "got {err:?}");
}
