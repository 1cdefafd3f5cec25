use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use hush_server::{api_router, site_router, ContactInbox};
use serde_json::{json, Value};
use std::path::PathBuf;
use tower::ServiceExt;

fn scratch_dir(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join("hush-server-tests").join(format!("{name}-{nanos}"))
}

fn inbox(name: &str) -> ContactInbox {
    ContactInbox::open(scratch_dir(name).join("contact.db")).expect("open inbox")
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder().uri("/api/health").body(Body::empty()).expect("request");
    let (status, body) = send(api_router(inbox("health")), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({ "status": "ok" }));
}

#[tokio::test]
async fn valid_request_is_accepted_and_stored() {
    let inbox = inbox("accepted");
    let payload = json!({
        "name": "  Jane Doe ",
        "email": "jane@hospital.org",
        "organization": "City NICU Hospital",
        "scope": "6 beds pilot, 20 beds scale",
        "requirements": "IEC 60601 pre-compliance"
    });

    let (status, body) = send(api_router(inbox.clone()), post_json("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let id = json_body(&body)["id"].as_i64().expect("receipt id");

    let stored = inbox.recent(5).expect("recent");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, id);
    assert_eq!(stored[0].request.name, "Jane Doe");
    assert_eq!(stored[0].request.scope, "6 beds pilot, 20 beds scale");
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let inbox = inbox("minimal");
    let payload = json!({ "name": "Ari", "email": "ari@hush.care" });
    let (status, _) = send(api_router(inbox.clone()), post_json("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(inbox.count().expect("count"), 1);
}

#[tokio::test]
async fn invalid_email_is_rejected_and_not_stored() {
    let inbox = inbox("invalid");
    let payload = json!({ "name": "Jane", "email": "jane-at-hospital" });
    let (status, body) = send(api_router(inbox.clone()), post_json("/api/contact", payload.to_string())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = json_body(&body)["error"].as_str().unwrap_or_default().to_string();
    assert!(error.contains("jane-at-hospital"), "{error}");
    assert_eq!(inbox.count().expect("count"), 0);
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let inbox = inbox("blank-name");
    let payload = json!({ "name": "   ", "email": "jane@hospital.org" });
    let (status, body) = send(api_router(inbox.clone()), post_json("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(&body)["error"], "name is required");
    assert_eq!(inbox.count().expect("count"), 0);
}

#[tokio::test]
async fn missing_name_is_reported_as_json() {
    let inbox = inbox("missing-name");
    let payload = json!({ "email": "jane@hospital.org" });
    let (status, body) = send(api_router(inbox.clone()), post_json("/api/contact", payload.to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(&body), json!({ "error": "name is required" }));
    assert_eq!(inbox.count().expect("count"), 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let inbox = inbox("malformed");
    let (status, _) = send(api_router(inbox.clone()), post_json("/api/contact", "{\"name\":".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(inbox.count().expect("count"), 0);
}

#[tokio::test]
async fn unknown_api_paths_are_not_served_the_bundle() {
    let dist = scratch_dir("api-404");
    std::fs::create_dir_all(&dist).expect("dist");
    std::fs::write(dist.join("index.html"), "<html>hush</html>").expect("index");

    let request = Request::builder().uri("/api/nope").body(Body::empty()).expect("request");
    let (status, body) = send(site_router(inbox("api-404"), &dist), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body), json!({ "error": "not found" }));
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dist = scratch_dir("spa");
    std::fs::create_dir_all(&dist).expect("dist");
    std::fs::write(dist.join("index.html"), "<html>hush-index</html>").expect("index");
    std::fs::write(dist.join("logo.svg"), "<svg/>").expect("logo");

    for path in ["/", "/team", "/bom"] {
        let request = Request::builder().uri(path).body(Body::empty()).expect("request");
        let (status, body) = send(site_router(inbox("spa"), &dist), request).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(String::from_utf8_lossy(&body).contains("hush-index"), "{path}");
    }

    let request = Request::builder().uri("/logo.svg").body(Body::empty()).expect("request");
    let (status, body) = send(site_router(inbox("spa"), &dist), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<svg/>");
}
