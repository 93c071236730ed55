#![allow(dead_code)]

// In-process mock chat server used by the integration tests.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "tok123";
pub const USER_ID: &str = "uid123";

#[derive(Default)]
pub struct MockChat {
    pub login_calls: AtomicUsize,
    pub me_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub create_calls: AtomicUsize,

    /// Usernames of accounts the server accepted
    pub created: Mutex<Vec<String>>,

    /// Roles reported for the admin identity at login
    pub roles: Mutex<Vec<String>>,

    /// When set, /api/v1/me answers with HTTP 500
    pub me_error: AtomicBool,

    /// When set, /api/v1/logout answers status "error"
    pub logout_error: AtomicBool,

    /// 1-based index of the create request to reject; 0 rejects none
    pub fail_create_at: AtomicUsize,
}

impl MockChat {
    pub fn new() -> Arc<Self> {
        let state = Self::default();
        *state.roles.lock().unwrap() = vec!["admin".to_string()];
        Arc::new(state)
    }
}

fn authed(headers: &HeaderMap) -> bool {
    headers.get("X-Auth-Token").and_then(|v| v.to_str().ok()) == Some(TOKEN)
        && headers.get("X-User-Id").and_then(|v| v.to_str().ok()) == Some(USER_ID)
}

async fn me(State(state): State<Arc<MockChat>>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    state.me_calls.fetch_add(1, Ordering::SeqCst);

    if state.me_error.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false})),
        );
    }

    if authed(&headers) {
        (StatusCode::OK, Json(json!({"success": true})))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"success": false})))
    }
}

async fn login(
    State(state): State<Arc<MockChat>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.login_calls.fetch_add(1, Ordering::SeqCst);

    if body["username"] != "admin" || body["password"] != "admin" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "Unauthorized"})),
        );
    }

    let roles = state.roles.lock().unwrap().clone();

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "data": {
                "authToken": TOKEN,
                "userId": USER_ID,
                "me": {
                    "_id": USER_ID,
                    "username": "admin",
                    "roles": roles,
                }
            }
        })),
    )
}

async fn logout(
    State(state): State<Arc<MockChat>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.logout_calls.fetch_add(1, Ordering::SeqCst);

    if state.logout_error.load(Ordering::SeqCst) {
        return (
            StatusCode::OK,
            Json(json!({"status": "error", "message": "logout disabled"})),
        );
    }

    if authed(&headers) {
        (StatusCode::OK, Json(json!({"status": "success"})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "message": "Unauthorized"})),
        )
    }
}

async fn create_user(
    State(state): State<Arc<MockChat>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let n = state.create_calls.fetch_add(1, Ordering::SeqCst) + 1;

    if !authed(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "error": "Unauthorized"})),
        );
    }

    let fail_at = state.fail_create_at.load(Ordering::SeqCst);
    if fail_at != 0 && n == fail_at {
        return (
            StatusCode::OK,
            Json(json!({"success": false, "error": "Username is already in use"})),
        );
    }

    let username = body["username"].as_str().unwrap_or_default().to_string();
    state.created.lock().unwrap().push(username.clone());

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "user": {"_id": format!("u{n}"), "username": username}
        })),
    )
}

/// Binds the mock server to an ephemeral port and returns its base URL.
pub async fn spawn_mock(state: Arc<MockChat>) -> String {
    let app = Router::new()
        .route("/api/v1/me", get(me))
        .route("/api/v1/login", post(login))
        .route("/api/v1/logout", post(logout))
        .route("/api/v1/users.create", post(create_user))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
