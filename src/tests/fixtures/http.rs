use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::actor::{ORG_ID_HEADER, USER_ID_HEADER, USER_ROLE_HEADER};

/// A request carrying org-1 caller headers for `user_id` with `role`.
pub fn request_as(
    method: &str,
    uri: &str,
    user_id: &str,
    role: &str,
    body: Option<&str>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(ORG_ID_HEADER, "org-1")
        .header(USER_ID_HEADER, user_id)
        .header(USER_ROLE_HEADER, role);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
