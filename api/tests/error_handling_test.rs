//! Fallback responses: malformed input, unknown routes, health

mod common;

use actix_web::{http::header, http::StatusCode, test};
use serde_json::json;
use sr_api::create_app;
use sr_core::domain::entities::Role;

use common::TestContext;

#[actix_web::test]
async fn test_malformed_json_body() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_malformed_query_string() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("Penelope", "penelope@example.com", Role::NormalUser).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/stores?page=first")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid query parameters"));
}

#[actix_web::test]
async fn test_invalid_path_id() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("Quincy", "quincy@example.com", Role::NormalUser).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/stores/not-a-uuid")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Valid ID is required");
}

#[actix_web::test]
async fn test_fractional_rating_rejected() {
    let ctx = TestContext::new();
    let owner = ctx.seed_user("Rupert", "rupert@example.com", Role::StoreOwner).await;
    let user = ctx.seed_user("Sylvia", "sylvia@example.com", Role::NormalUser).await;
    let store = ctx.seed_store("Rupert's Records", "records@example.com", owner.id).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for rating in [json!(4.5), json!(0), json!(6)] {
        let req = test::TestRequest::post()
            .uri("/api/ratings")
            .insert_header(ctx.bearer(&user))
            .set_json(json!({ "storeId": store.id, "rating": rating }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Rating must be an integer between 1 and 5");
    }
}

#[actix_web::test]
async fn test_unknown_route() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route GET /api/nowhere not found");
}

#[actix_web::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "store-rating-api");
}
