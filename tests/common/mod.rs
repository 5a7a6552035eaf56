use std::sync::{Arc, Mutex, mpsc};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use firetree::config::StoreConfig;

pub const PROJECT: &str = "demo";

const DOCUMENTS_PREFIX: &str = "/projects/demo/databases/(default)/documents";

#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub body: Value,
}

#[derive(Clone)]
struct FakeState {
    token: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// In-process fake of the document and management REST endpoints.
pub struct ServerGuard {
    pub base_url: String,
    pub token: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl ServerGuard {
    /// Store config pointing both base urls at the fake.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            base_url: self.base_url.clone(),
            management_url: format!("{}/v1beta1", self.base_url),
            token: Some(self.token.clone()),
            projects: vec![PROJECT.to_string()],
            ..StoreConfig::default()
        }
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

pub fn spawn_server(token: &str) -> Result<ServerGuard> {
    let state = FakeState {
        token: token.to_string(),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let seen = state.seen.clone();

    let (addr_tx, addr_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let handle = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(anyhow::anyhow!("build runtime: {}", err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(anyhow::anyhow!("bind: {}", err)));
                    return;
                }
            };
            let _ = addr_tx.send(listener.local_addr().map_err(anyhow::Error::from));

            let app = Router::new().fallback(handle_request).with_state(state);
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
    });

    let addr = addr_rx
        .recv()
        .context("fake server thread exited before binding")??;

    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        token: token.to_string(),
        seen,
        shutdown: Some(shutdown_tx),
        handle: Some(handle),
    })
}

fn wire_doc(path: &str, fields: Value) -> Value {
    json!({
        "name": format!("projects/{}/databases/(default)/documents/{}", PROJECT, path),
        "fields": fields,
        "createTime": "2024-01-01T00:00:00Z",
        "updateTime": "2024-01-01T00:00:00Z",
    })
}

fn alice() -> Value {
    wire_doc(
        "users/alice",
        json!({
            "name": {"stringValue": "Alice"},
            "age": {"integerValue": "30"},
            "tags": {"arrayValue": {"values": [{"stringValue": "admin"}]}},
        }),
    )
}

fn bob() -> Value {
    wire_doc(
        "users/bob",
        json!({
            "name": {"stringValue": "Bob"},
            "age": {"integerValue": "25"},
        }),
    )
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({"error": {"code": 404, "status": "NOT_FOUND"}})),
    )
        .into_response()
}

async fn handle_request(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    if let Ok(mut seen) = state.seen.lock() {
        seen.push(SeenRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().unwrap_or_default().to_string(),
            body: body.clone(),
        });
    }

    let expected = format!("Bearer {}", state.token);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let path = uri.path();
    if let Some(rest) = path.strip_prefix("/v1beta1/projects/") {
        return match rest {
            PROJECT => axum::Json(json!({
                "projectId": PROJECT,
                "projectNumber": "1234",
                "displayName": "Demo",
                "state": "ACTIVE",
                "resources": {"hostingSite": "demo"},
            }))
            .into_response(),
            _ => not_found(),
        };
    }

    let Some(rest) = path.strip_prefix(DOCUMENTS_PREFIX) else {
        return not_found();
    };

    match (method, rest) {
        (Method::POST, ":listCollectionIds") => {
            // Two pages so callers have to follow the page token.
            if body.get("pageToken").and_then(Value::as_str) == Some("next") {
                axum::Json(json!({"collectionIds": ["users"]})).into_response()
            } else {
                axum::Json(json!({"collectionIds": ["products"], "nextPageToken": "next"}))
                    .into_response()
            }
        }
        (Method::POST, "/users/alice:listCollectionIds") => {
            axum::Json(json!({"collectionIds": ["orders"]})).into_response()
        }
        (Method::POST, r) if r.ends_with(":listCollectionIds") => not_found(),
        (Method::POST, ":runQuery") => axum::Json(json!([
            {"readTime": "2024-01-01T00:00:00Z"},
            {"document": alice(), "readTime": "2024-01-01T00:00:00Z"},
        ]))
        .into_response(),
        (Method::POST, "/users/alice:runQuery") => axum::Json(json!([
            {"readTime": "2024-01-01T00:00:00Z"},
        ]))
        .into_response(),
        (Method::GET, "/users") => {
            axum::Json(json!({"documents": [alice(), bob()]})).into_response()
        }
        (Method::GET, "/users/alice") => axum::Json(alice()).into_response(),
        (Method::GET, "/users/bob") => axum::Json(bob()).into_response(),
        _ => not_found(),
    }
}
