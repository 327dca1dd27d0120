// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use run_duel::config::Config;
use run_duel::routes::create_router;
use run_duel::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Access token the stub backend accepts.
#[allow(dead_code)]
pub const GOOD_TOKEN: &str = "good-token";

/// Serve `router` on an ephemeral local port, returning its base URL.
#[allow(dead_code)]
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Email the stub backend treats as already registered.
#[allow(dead_code)]
pub const TAKEN_EMAIL: &str = "taken@runduel.test";

/// Stub backend that serves `records` to `GOOD_TOKEN`, accepts
/// `runner@runduel.test` / `pw` at sign-in and refuses `TAKEN_EMAIL` at
/// sign-up.
#[allow(dead_code)]
pub fn runnings_backend(records: Value) -> Router {
    Router::new()
        .route(
            "/api/v1/runnings/me",
            get(move |headers: HeaderMap| {
                let records = records.clone();
                async move {
                    let expected = format!("Bearer {}", GOOD_TOKEN);
                    let auth = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|h| h.to_str().ok());
                    if auth != Some(expected.as_str()) {
                        return (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({"message": "유효하지 않은 토큰입니다."})),
                        )
                            .into_response();
                    }
                    Json(records).into_response()
                }
            }),
        )
        .route("/auth/signin", post(stub_sign_in))
        .route("/auth/signup", post(stub_sign_up))
}

async fn stub_sign_up(Json(body): Json<Value>) -> Response {
    if body["email"] == TAKEN_EMAIL {
        return (
            StatusCode::CONFLICT,
            Json(json!({"message": "이미 사용 중인 이메일입니다."})),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(json!({"id": 42, "email": body["email"], "nickname": body["nickname"]})),
    )
        .into_response()
}

async fn stub_sign_in(Json(body): Json<Value>) -> Response {
    if body["email"] == "runner@runduel.test" && body["password"] == "pw" {
        Json(json!({"accessToken": GOOD_TOKEN, "refreshToken": "refresh-token"})).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "이메일 또는 비밀번호가 올바르지 않습니다."})),
        )
            .into_response()
    }
}

/// Stub backend whose every endpoint answers `status` with `body`.
#[allow(dead_code)]
pub fn status_backend(status: StatusCode, body: &'static str) -> Router {
    let handler = move || async move { (status, body).into_response() };
    Router::new()
        .route("/api/v1/runnings/me", get(handler))
        .route("/auth/signin", post(handler))
        .route("/auth/signup", post(handler))
}

/// Sample backend listing: three runs in November/December 2024.
#[allow(dead_code)]
pub fn sample_records() -> Value {
    json!([
        {
            "runningId": 3,
            "userId": 1,
            "crewId": 2,
            "distance": 12500,
            "duration": 3912,
            "avgHeartrate": 151.0,
            "pace": 313,
            "startedAt": "2024-12-01T07:10:00",
            "createdAt": "2024-12-01T08:20:00"
        },
        {
            "runningId": 2,
            "userId": 1,
            "crewId": 2,
            "distance": 5000,
            "duration": 1395,
            "avgHeartrate": null,
            "pace": 279,
            "startedAt": "2024-11-24T06:00:00",
            "createdAt": "2024-11-24T06:30:00"
        },
        {
            "runningId": 1,
            "userId": 1,
            "crewId": 2,
            "distance": 0,
            "duration": 0,
            "avgHeartrate": null,
            "pace": null,
            "startedAt": "2024-11-02T19:45:00",
            "createdAt": "2024-11-02T19:45:10"
        }
    ])
}

/// Create a test app talking to the backend at `api_base_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(api_base_url: &str) -> (Router, Arc<AppState>) {
    let config = Config {
        api_base_url: api_base_url.to_string(),
        ..Config::test_default()
    };

    let state = Arc::new(AppState::from_config(config).expect("Failed to build state"));
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
