#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use gateway::khalti::{KhaltiClient, SecretKey};
use serde_json::Value;
use storefront_server::{audit::AuditLog, create_router, state::AppState};
use tokio::net::TcpListener;

pub const TEST_SECRET: &str = "test_secret_key_123";

/// One request as seen by the fake gateway.
#[derive(Debug, Clone)]
pub struct Seen {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct FakeKhalti {
    status: StatusCode,
    body: Value,
    delay: Duration,
    seen: Arc<Mutex<Vec<Seen>>>,
}

async fn fake_endpoint(
    State(fake): State<FakeKhalti>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    fake.seen.lock().unwrap().push(Seen {
        path: uri.path().to_string(),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });
    tokio::time::sleep(fake.delay).await;
    (fake.status, Json(fake.body.clone()))
}

/// Starts a stand-in Khalti API answering every call with `status` and `body`.
pub async fn spawn_fake_khalti(
    status: StatusCode,
    body: Value,
    delay: Duration,
) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fake = FakeKhalti {
        status,
        body,
        delay,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/epayment/initiate/", post(fake_endpoint))
        .route("/epayment/lookup/", post(fake_endpoint))
        .with_state(fake);

    (serve(app).await, seen)
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn khalti_app(base_url: String, timeout: Duration, audit: Option<AuditLog>) -> Router {
    let client = KhaltiClient::new(base_url, SecretKey::new(TEST_SECRET), timeout).unwrap();
    create_router(AppState::new(client, audit))
}

pub async fn send(app: Router, method: Method, path: &str, body: &str) -> (StatusCode, String) {
    let base_url = serve(app).await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let response = client
        .request(method, format!("{base_url}{path}"))
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();

    let status = response.status();
    (status, response.text().await.unwrap())
}

pub async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let (status, text) = send(app, Method::POST, path, body).await;
    (status, serde_json::from_str(&text).unwrap())
}
