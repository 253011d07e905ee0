//! End-to-end API tests over an in-memory database
//!
//! Each test assembles the full router (auth middleware included) and
//! drives it with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

use portal_server::core::server::build_router;
use portal_server::{Config, JwtService, ServerState};

async fn test_app() -> Router {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);

    let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
    db.use_ns("test").use_db("test").await.expect("namespace");

    let state = ServerState::new(config, db).expect("server state");
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder.body(Body::empty()).expect("request")
}

fn with_json(method: &str, path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Register a user and return a bearer token
async fn login(app: &Router) -> String {
    let (status, _) = send(
        app,
        with_json(
            "POST",
            "/api/register",
            None,
            json!({"username": "officer01", "password": "secret123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        with_json(
            "POST",
            "/api/login",
            None,
            json!({"username": "officer01", "password": "secret123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    body["data"]["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn test_ticket_scan_failure_is_not_an_empty_scan() {
    // A handle with no namespace/database selected fails every query,
    // standing in for a broken record store.
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::with_overrides(dir.path().to_string_lossy(), 0);
    let token = JwtService::with_config(config.jwt.clone())
        .generate_token("officer01", "user")
        .expect("token");

    let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
    let state = ServerState::new(config, db).expect("server state");
    let app = build_router(state);

    let (status, body) = send(&app, get("/api/ticket-number", Some(&token))).await;

    // A failed scan is a 500, never the start-of-sequence ticket
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["error"], json!("Database error"));
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/complaint-records", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["error"], json!("No token provided"));

    let (status, _) = send(&app, get("/api/complaint-records", Some("not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = test_app().await;
    let _token = login(&app).await;

    let (status_unknown, body_unknown) = send(
        &app,
        with_json(
            "POST",
            "/api/login",
            None,
            json!({"username": "ghost", "password": "secret123"}),
        ),
    )
    .await;
    let (status_wrong, body_wrong) = send(
        &app,
        with_json(
            "POST",
            "/api/login",
            None,
            json!({"username": "officer01", "password": "wrong-password"}),
        ),
    )
    .await;

    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    // Same body for unknown user and wrong password
    assert_eq!(body_unknown, body_wrong);
    assert_eq!(body_unknown["error"], json!("Invalid credentials"));

    // Missing fields are a validation error, not a 401
    let (status, _) = send(
        &app,
        with_json("POST", "/api/login", None, json!({"username": "officer01"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/register",
            None,
            json!({"username": "officer01", "password": "short"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/register",
            None,
            json!({"username": "officer01", "password": "secret123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/register",
            None,
            json!({"username": "officer01", "password": "secret456"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["ok"], json!(false));
}

#[tokio::test]
async fn test_token_verification() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, body) = send(&app, get("/api/login", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["username"], json!("officer01"));
    assert_eq!(body["data"]["user"]["role"], json!("user"));

    let (status, _) = send(&app, get("/api/login", Some("garbage"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_complaint_lifecycle() {
    let app = test_app().await;
    let token = login(&app).await;

    // Allocate the first ticket number
    let (status, body) = send(&app, get("/api/ticket-number", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let ticket = body["data"]["ticketNumber"].as_str().expect("ticket");
    assert_eq!(ticket, "JD000001AP");

    // Register; the Hindi department is stored in canonical English
    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/complaint-records",
            Some(&token),
            json!({
                "ticketNumber": ticket,
                "name": "Asha Kulkarni",
                "age": "26-35",
                "problem": "जल आपूर्ति",
                "phoneNumber": "9876543210",
                "status": "Under Review"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["data"]["problem"], json!("Water Supply"));
    assert_eq!(body["data"]["complaintSource"], json!("Web"));

    // Duplicate ticket number
    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/complaint-records",
            Some(&token),
            json!({"ticketNumber": ticket}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The allocator advances past the stored record
    let (_, body) = send(&app, get("/api/ticket-number", Some(&token))).await;
    assert_eq!(body["data"]["ticketNumber"], json!("JD000002AP"));

    // Fetch
    let path = format!("/api/complaint-records/{ticket}");
    let (status, body) = send(&app, get(&path, Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Asha Kulkarni"));

    // Allow-listed update
    let (status, body) = send(
        &app,
        with_json(
            "PUT",
            &path,
            Some(&token),
            json!({"status": "Problem Solved", "dbEmp": "R. Patil"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("Problem Solved"));
    assert_eq!(body["data"]["dbEmployeeName"], json!("R. Patil"));

    // Empty update set
    let (status, body) = send(
        &app,
        with_json("PUT", &path, Some(&token), json!({"name": "ignored"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], json!(false));
    assert_eq!(body["error"], json!("No updatable fields provided"));

    // Delete, then the record is gone
    let (status, body) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(&path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .expect("request"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));

    let (status, _) = send(&app, get(&path, Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = test_app().await;
    let token = login(&app).await;

    for (ticket, problem, status) in [
        ("JD000001AP", "जल आपूर्ति", "Problem Solved"),
        ("JD000002AP", "Water Supply", "Under Review"),
        ("JD000003AP", "म्हाडा", "Under Review"),
    ] {
        let (code, _) = send(
            &app,
            with_json(
                "POST",
                "/api/complaint-records",
                Some(&token),
                json!({
                    "ticketNumber": ticket,
                    "age": "26-35",
                    "problem": problem,
                    "status": status
                }),
            ),
        )
        .await;
        assert_eq!(code, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/api/dashboard/stats", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["totalTickets"], json!(3));
    assert_eq!(data["departmentCounts"]["Water Supply"], json!(2));
    assert_eq!(data["departmentCounts"]["MHADA"], json!(1));
    assert_eq!(data["statusCounts"]["Under Review"], json!(2));
    assert_eq!(data["resolvedTickets"], json!(1));
    assert_eq!(data["resolutionRate"], json!("33.3"));
    assert_eq!(data["recentTickets"], json!(3));

    // A range in the past excludes everything
    let (status, body) = send(
        &app,
        get(
            "/api/dashboard/stats?startDate=2020-01-01&endDate=2020-12-31",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalTickets"], json!(0));

    // Malformed dates are rejected
    let (status, _) = send(
        &app,
        get("/api/dashboard/stats?startDate=yesterday", Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_pdf_validation() {
    let app = test_app().await;
    let token = login(&app).await;

    // Missing fields
    let (status, _) = send(
        &app,
        with_json("POST", "/api/upload-pdf", Some(&token), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Invalid base64 is rejected before any storage call
    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/api/upload-pdf",
            Some(&token),
            json!({"ticketNumber": "JD000001AP", "pdfBase64": "!!not-base64!!"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid base64 PDF data"));
}

#[tokio::test]
async fn test_send_whatsapp_validation() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/send-whatsapp",
            Some(&token),
            json!({"ticketNumber": "JD000001AP"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/api/send-whatsapp",
            Some(&token),
            json!({"phoneNumber": "12345", "ticketNumber": "JD000001AP"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
