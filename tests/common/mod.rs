use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use iceapple_admin::iceapple_config::{AuthConfig, CorsConfig};
use iceapple_admin::router::init_router;
use iceapple_admin::state::AppState;
use serde_json::Value;

pub const ACCESS_TOKEN: &str = "opaque-test-token";

pub fn test_state() -> AppState {
    AppState::new(AuthConfig::default(), CorsConfig::default())
}

pub fn setup_test_app() -> Router {
    init_router(test_state())
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

/// Request carrying the default `accessToken` cookie.
#[allow(dead_code)]
pub fn authed(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("cookie", format!("accessToken={}", ACCESS_TOKEN));

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
