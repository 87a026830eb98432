//! In-process vehicles backend for tests.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use serde_json::{Value, json};

use crate::config::CliConfig;
use crate::http::HttpApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    List,
    Create(Value),
    Update(String, Value),
}

#[derive(Default)]
pub struct Backend {
    pub vehicles: Vec<Value>,
    pub requests: Vec<Recorded>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub garbage_list: bool,
}

pub type SharedBackend = Arc<Mutex<Backend>>;

pub fn backend_with(vehicles: Vec<Value>) -> SharedBackend {
    Arc::new(Mutex::new(Backend { vehicles, ..Backend::default() }))
}

pub fn vehicle_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "status": status,
        "updatedAt": "2024-03-05T14:07:09.000Z",
        "__v": 0
    })
}

async fn list(State(backend): State<SharedBackend>) -> Result<Json<Value>, (StatusCode, String)> {
    let mut b = backend.lock().unwrap();
    b.requests.push(Recorded::List);
    if b.fail_list {
        return Err((StatusCode::INTERNAL_SERVER_ERROR, "boom".to_owned()));
    }
    if b.garbage_list {
        return Ok(Json(json!({ "unexpected": true })));
    }
    Ok(Json(Value::Array(b.vehicles.clone())))
}

async fn create(
    State(backend): State<SharedBackend>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut b = backend.lock().unwrap();
    b.requests.push(Recorded::Create(body.clone()));
    if b.fail_create {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let id = format!("v{}", b.vehicles.len() + 1);
    let created = json!({
        "_id": id,
        "name": body["name"],
        "status": body["status"],
        "updatedAt": "2024-03-05T14:07:09.000Z"
    });
    b.vehicles.push(created.clone());
    Ok((StatusCode::CREATED, Json(created)))
}

async fn update(
    State(backend): State<SharedBackend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut b = backend.lock().unwrap();
    b.requests.push(Recorded::Update(id.clone(), body.clone()));
    if b.fail_update {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let vehicle = b
        .vehicles
        .iter_mut()
        .find(|v| v["_id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;
    vehicle["status"] = body["status"].clone();
    Ok(Json(vehicle.clone()))
}

/// Serve `backend` on an ephemeral port and return its base URL.
pub async fn spawn_backend(backend: SharedBackend) -> String {
    let app = Router::new()
        .route("/api/vehicles", get(list).post(create))
        .route("/api/vehicles/{id}", put(update))
        .with_state(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn http_api(base_url: &str) -> HttpApi {
    let config = CliConfig::new(base_url, 5).unwrap();
    HttpApi::new(&config).unwrap()
}
