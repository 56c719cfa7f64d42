//! End-to-end coverage for the item endpoints against an in-memory
//! repository: create, list, update, and delete flows plus the failure
//! paths (validation, not-found, store outage).

use std::sync::Arc;

use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use stockroom::inbound::http::items::{create_item, delete_item, list_items, update_item};
use stockroom::inbound::http::state::HttpState;
use stockroom::middleware::Trace;
use stockroom::test_support::MemoryItemRepository;

fn app_for(
    repo: Arc<MemoryItemRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = web::Data::new(HttpState::new(repo));
    App::new().app_data(state).wrap(Trace).service(
        web::scope("/api")
            .service(list_items)
            .service(create_item)
            .service(update_item)
            .service(delete_item),
    )
}

fn widget_body() -> Value {
    json!({ "name": "Widget", "price": 9.99, "quantity": 5 })
}

#[actix_web::test]
async fn listing_an_empty_store_returns_an_empty_array() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn create_then_update_preserves_identifier_and_creation_time() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .set_json(widget_body())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_str().expect("id assigned").to_owned();
    let created_at = created["createdAt"].as_str().expect("timestamp").to_owned();
    assert_eq!(created["description"], "");
    assert_eq!(created["price"], 9.99);
    assert_eq!(created["quantity"], 5);

    let req = test::TestRequest::put()
        .uri(&format!("/api/items/{id}"))
        .set_json(json!({
            "name": "Widget",
            "description": "blue",
            "price": 12.50,
            "quantity": 3
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(res).await;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["createdAt"], created_at.as_str());
    assert_eq!(updated["description"], "blue");
    assert_eq!(updated["price"], 12.50);
    assert_eq!(updated["quantity"], 3);
}

#[actix_web::test]
async fn create_with_negative_price_is_rejected_and_nothing_persists() {
    let repo = Arc::new(MemoryItemRepository::default());
    let app = test::init_service(app_for(repo.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .set_json(json!({ "name": "Widget", "price": -1, "quantity": 5 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "price");

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn numeric_strings_are_coerced_on_create() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .set_json(json!({ "name": "Widget", "price": "9.99", "quantity": "5" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let created: Value = test::read_body_json(res).await;
    assert_eq!(created["price"], 9.99);
    assert_eq!(created["quantity"], 5);
}

#[actix_web::test]
async fn updating_an_unknown_identifier_yields_404_and_creates_nothing() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::put()
        .uri("/api/items/4f0c4f9e-9a54-4d1c-9c40-1f8f2f6d9b1a")
        .set_json(widget_body())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Item not found");

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn malformed_identifier_is_a_validation_failure() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::put()
        .uri("/api/items/not-a-uuid")
        .set_json(widget_body())
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["code"], "invalid_uuid");
}

#[actix_web::test]
async fn missing_name_is_rejected_with_field_details() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .set_json(json!({ "name": "   ", "price": 1, "quantity": 1 }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "name");
    assert_eq!(body["details"]["code"], "missing_field");
}

#[actix_web::test]
async fn store_failures_surface_as_redacted_500s() {
    let repo = Arc::new(MemoryItemRepository::default());
    let app = test::init_service(app_for(repo.clone())).await;

    repo.fail_next_call();
    let req = test::TestRequest::get().uri("/api/items").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Internal server error");
}

#[actix_web::test]
async fn deleting_an_item_removes_it_and_repeats_404() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::post()
        .uri("/api/items")
        .set_json(widget_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().expect("id assigned").to_owned();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/items/{id}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/items/{id}"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = test::init_service(app_for(Arc::new(MemoryItemRepository::default()))).await;

    let req = test::TestRequest::get().uri("/api/items").to_request();
    let res = test::call_service(&app, req).await;
    assert!(res.headers().contains_key("trace-id"));
}
