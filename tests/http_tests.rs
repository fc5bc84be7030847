use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use roomql::config::StoreBackend;
use roomql::graphql::{build_schema_for, router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_graphql(query: &str) -> (StatusCode, Value) {
    post_graphql_to(StoreBackend::Fixture, query).await
}

async fn post_graphql_to(backend: StoreBackend, query: &str) -> (StatusCode, Value) {
    let app = router(build_schema_for(backend));
    let request = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_create_room_over_http() {
    let (status, body) = post_graphql(
        "mutation { createPostRoom(id: 123, length: 5.55, width: 15.99, height: 25.001) { id length } }",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["createPostRoom"],
        json!({ "id": "123", "length": 5.55 })
    );
}

#[tokio::test]
async fn test_validation_error_is_200_with_errors() {
    let (status, body) = post_graphql(
        "mutation { createPostFurniture(id: 123, length: 22.55, width: 32.99, height: 22.001, roomId: 1) { id } }",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["errors"][0]["message"],
        "Dimensions for the furniture have to be less than 5"
    );
}

#[tokio::test]
async fn test_update_validation_error_is_200() {
    let (status, body) = post_graphql(
        "mutation { updatePostRoom(id: 123, length: 105, width: 15.21, height: 25) { id } }",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(
        body["errors"][0]["message"],
        "Update dimensions for room have to be less than 100"
    );
    assert_eq!(body["errors"][0]["path"], json!(["updatePostRoom"]));
}

#[tokio::test]
async fn test_not_found_is_200() {
    let (status, body) =
        post_graphql_to(StoreBackend::Memory, "{ getPostRoom(id: 321) { id } }").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"][0]["message"], "Room with id: 321 does not exist.");
    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_type_coercion_error_is_400() {
    let (status, body) = post_graphql(
        r#"mutation { createPostRoom(id: 1, length: "apple", width: 15, height: 25) { id } }"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"][0]["message"].as_str().unwrap().contains("length"));
}

#[tokio::test]
async fn test_missing_argument_is_400() {
    let (status, body) =
        post_graphql("mutation { createPostRoom(id: 1, length: 5, width: 15) { id } }").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("argument \"height\""));
    assert!(message.contains("is required"));
}

#[tokio::test]
async fn test_syntax_error_is_400() {
    let (status, _) = post_graphql("mutation { createPostRoom(").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let app = router(build_schema_for(StoreBackend::Fixture));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_graphiql_page() {
    let app = router(build_schema_for(StoreBackend::Fixture));
    let response = app
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
}
