use super::*;

/// Tests that responses allow cross-origin callers.
///
/// Expected: `access-control-allow-origin: *` on a plain GET
#[tokio::test]
async fn allows_any_origin() {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri(OPERATION_URI)
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app(&test).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

/// Tests that the OpenAPI document lists the operation endpoint.
///
/// Expected: 200 with `/api/v1/operation` under `paths` and the 400 schema covering
/// both failure payloads
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().await.unwrap();

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(&test), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Max Integer Solver API");
    assert!(body["paths"][OPERATION_URI]["post"].is_object());
    assert!(body["paths"][OPERATION_URI]["get"].is_object());

    // 400 replies carry either field messages or a classified error
    let document = body.to_string();
    assert!(document.contains("ErrorDataDto"));
    assert!(body["paths"][OPERATION_URI]["post"]["responses"]["400"].is_object());
}

/// Tests an explicit origin allowlist.
///
/// Expected: listed origin echoed back, unlisted origin gets no CORS header
#[tokio::test]
async fn echoes_only_listed_origins() {
    let test = TestBuilder::new()
        .with_operation_tables()
        .build()
        .await
        .unwrap();
    let app = startup::build_router(
        AppState::new(test.db.clone().unwrap()),
        &["http://allowed.test".to_string()],
    );

    let request = |origin: &str| {
        Request::builder()
            .method(Method::GET)
            .uri(OPERATION_URI)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .clone()
        .oneshot(request("http://allowed.test"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://allowed.test"
    );

    let other = app.oneshot(request("http://other.test")).await.unwrap();
    assert!(other
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
