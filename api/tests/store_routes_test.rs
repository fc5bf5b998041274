//! Store browsing and administration over HTTP

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;
use sr_api::create_app;
use sr_core::domain::entities::Role;
use sr_core::repositories::RatingRepository;

use common::TestContext;

#[actix_web::test]
async fn test_create_then_fetch_store() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("Quentin", "quentin@example.com", Role::SystemAdmin).await;
    let owner = ctx.seed_user("Rosalind", "rosalind@example.com", Role::StoreOwner).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/stores")
        .insert_header(ctx.bearer(&admin))
        .set_json(json!({
            "name": "Rosalind's Roastery",
            "email": "roastery@example.com",
            "address": "12 Bean Lane",
            "ownerId": owner.id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Store created successfully");
    let store_id = body["data"]["store"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/stores/{}", store_id))
        .insert_header(ctx.bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let store = &body["data"]["store"];
    assert_eq!(store["name"], "Rosalind's Roastery");
    assert_eq!(store["email"], "roastery@example.com");
    assert_eq!(store["address"], "12 Bean Lane");
    assert_eq!(store["averageRating"], "0.00");
    assert_eq!(store["totalRatings"], 0);
    assert_eq!(store["owner"]["id"], owner.id.to_string());
}

#[actix_web::test]
async fn test_create_store_rules() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("Sebastian", "sebastian@example.com", Role::SystemAdmin).await;
    let user = ctx.seed_user("Tabitha", "tabitha@example.com", Role::NormalUser).await;
    let owner = ctx.seed_user("Ulysses", "ulysses@example.com", Role::StoreOwner).await;
    ctx.seed_store("Existing Shop", "taken@example.com", owner.id).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let cases = [
        (
            json!({ "name": "Shop", "email": "a@example.com", "address": "1 Road", "ownerId": user.id }),
            "Owner must have store_owner role",
        ),
        (
            json!({ "name": "Shop", "email": "taken@example.com", "address": "1 Road", "ownerId": owner.id }),
            "Store with this email already exists",
        ),
        (
            json!({ "name": "Shop", "email": "b@example.com", "address": "", "ownerId": owner.id }),
            "Address is required",
        ),
    ];

    for (payload, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/stores")
            .insert_header(ctx.bearer(&admin))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{message}");
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], message);
    }

    // Non-admins cannot create stores at all
    let req = test::TestRequest::post()
        .uri("/api/stores")
        .insert_header(ctx.bearer(&owner))
        .set_json(json!({ "name": "Shop", "email": "c@example.com", "address": "1 Road", "ownerId": owner.id }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_search_second_page() {
    let ctx = TestContext::new();
    let owner = ctx.seed_user("Victoria", "victoria@example.com", Role::StoreOwner).await;
    let user = ctx.seed_user("Walter", "walter@example.com", Role::NormalUser).await;
    for i in 0..15 {
        ctx.seed_store(&format!("Store {:02}", i), &format!("store{}@example.com", i), owner.id)
            .await;
    }
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/stores/search?page=2&limit=10")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["stores"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["pagination"]["totalPages"], 2);
    assert_eq!(body["data"]["pagination"]["currentPage"], 2);
    assert_eq!(body["data"]["pagination"]["totalItems"], 15);
    // name ASC by default
    assert_eq!(body["data"]["stores"][0]["name"], "Store 10");
}

#[actix_web::test]
async fn test_list_stores_carries_caller_rating() {
    let ctx = TestContext::new();
    let owner = ctx.seed_user("Xavier", "xavier@example.com", Role::StoreOwner).await;
    let user = ctx.seed_user("Yolanda", "yolanda@example.com", Role::NormalUser).await;
    let store = ctx.seed_store("Xavier's Pizza", "pizza@example.com", owner.id).await;
    let rating = ctx.seed_rating(user.id, store.id, 3).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/stores?name=pizza")
        .insert_header(ctx.bearer(&user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let entry = &body["data"]["stores"][0];
    assert_eq!(entry["averageRating"], "3.00");
    assert_eq!(entry["userRating"], 3);
    assert_eq!(entry["userRatingId"], rating.id.to_string());
    assert_eq!(body["data"]["pagination"]["itemsPerPage"], 12);
}

#[actix_web::test]
async fn test_delete_store_removes_its_ratings() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("Zachary", "zachary@example.com", Role::SystemAdmin).await;
    let owner = ctx.seed_user("Adeline", "adeline@example.com", Role::StoreOwner).await;
    let user = ctx.seed_user("Bartholomew", "bart@example.com", Role::NormalUser).await;
    let store = ctx.seed_store("Adeline's Florist", "florist@example.com", owner.id).await;
    ctx.seed_rating(user.id, store.id, 5).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/stores/{}", store.id))
        .insert_header(ctx.bearer(&admin))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    assert!(ctx.ratings.find_by_store(store.id).await.unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/stores/{}", store.id))
        .insert_header(ctx.bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Store not found");
}
