//! Product endpoint behavior: creation defaults, category filtering,
//! find-or-create idempotence, and category reassignment.

mod common;

use common::{
    MockSource, barcodes, create_category, create_product, send, test_app, test_app_with_source,
};
use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

#[tokio::test]
async fn create_applies_defaults() {
    let (app, _, _tmp) = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "111", "name": "Mouse" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Uncategorized");
    let price: Decimal = serde_json::from_value(body["price"].clone()).unwrap();
    assert_eq!(price, Decimal::ZERO);
}

#[tokio::test]
async fn duplicate_barcode_is_conflict() {
    let (app, _, _tmp) = test_app().await;

    create_product(&app, "111", "Keyboard", None).await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "111", "name": "Keyboard again" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E0004");

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let (app, _, _tmp) = test_app().await;

    // empty barcode
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "", "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // empty name
    let (status, _) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "1", "name": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // negative price
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "1", "name": "x", "price": -1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    // unknown category reference
    let (status, body) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({ "barcode": "1", "name": "x", "category": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn category_filter_is_exact_and_case_sensitive() {
    let (app, _, _tmp) = test_app().await;

    create_category(&app, "Office").await;
    create_category(&app, "office").await;
    create_product(&app, "111", "Stapler", Some("Office")).await;
    create_product(&app, "222", "Tape", Some("office")).await;
    create_product(&app, "333", "Binder", Some("Office")).await;

    let (status, list) = send(&app, "GET", "/api/products?category=Office", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(barcodes(&list), vec!["111", "333"]);

    let (_, list) = send(&app, "GET", "/api/products?category=office", None).await;
    assert_eq!(barcodes(&list), vec!["222"]);

    let (_, list) = send(&app, "GET", "/api/products?category=Nothing", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_is_find_or_create_and_idempotent() {
    let (app, upstream, _tmp) = test_app().await;

    let (status, first) = send(&app, "GET", "/api/products/4006381333931", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["name"], "Stabilo Point 88 Fineliner");
    assert_eq!(first["description"], "Stabilo Point 88 Fineliner");
    assert_eq!(first["category"], "Uncategorized");

    // Second lookup returns the first-created record unchanged and does not
    // consult the upstream again.
    let (status, second) = send(&app, "GET", "/api/products/4006381333931", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
    assert_eq!(upstream.calls(), 1);

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn lookup_miss_falls_back_to_unknown_product() {
    let (app, upstream, _tmp) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/products/0000000000000", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Unknown Product");
    // 占位名不会泄漏进描述字段
    assert_eq!(body["description"], "");
    assert_eq!(body["category"], "Uncategorized");
    let price: Decimal = serde_json::from_value(body["price"].clone()).unwrap();
    assert_eq!(price, Decimal::ZERO);
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_and_persists_nothing() {
    let (app, upstream, _tmp) = test_app_with_source(MockSource::unreachable()).await;

    let (status, body) = send(&app, "GET", "/api/products/4006381333931", None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "E9003");
    assert_eq!(upstream.calls(), 1);

    // 失败的查询不落库
    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_never_shadows_existing_record() {
    let (app, upstream, _tmp) = test_app().await;

    create_category(&app, "Pens").await;
    create_product(&app, "4006381333931", "My Pen", Some("Pens")).await;

    let (status, body) = send(&app, "GET", "/api/products/4006381333931", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "My Pen");
    assert_eq!(body["category"], "Pens");
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn patch_unknown_barcode_is_not_found_and_creates_nothing() {
    let (app, _, _tmp) = test_app().await;

    create_category(&app, "B").await;
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/111",
        Some(json!({ "category": "B" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn patch_moves_only_the_target_product() {
    let (app, _, _tmp) = test_app().await;

    create_category(&app, "A").await;
    create_category(&app, "B").await;
    let (_, created) = send(
        &app,
        "POST",
        "/api/products",
        Some(json!({
            "barcode": "111",
            "name": "Stapler",
            "description": "Red stapler",
            "price": 12.5,
            "category": "A"
        })),
    )
    .await;
    create_product(&app, "222", "Tape", Some("A")).await;

    let (status, moved) = send(
        &app,
        "PATCH",
        "/api/products/222",
        Some(json!({ "category": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["category"], "B");
    assert_eq!(moved["name"], "Tape");

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    let list = list.as_array().unwrap();
    let p111 = list.iter().find(|p| p["barcode"] == "111").unwrap();
    let p222 = list.iter().find(|p| p["barcode"] == "222").unwrap();

    // 111 untouched, field for field
    assert_eq!(*p111, created);
    assert_eq!(p222["category"], "B");
}

#[tokio::test]
async fn patch_rejects_unknown_category() {
    let (app, _, _tmp) = test_app().await;

    create_product(&app, "111", "Tape", None).await;
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/111",
        Some(json!({ "category": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");

    let (_, list) = send(&app, "GET", "/api/products", None).await;
    assert_eq!(list[0]["category"], "Uncategorized");
}

#[tokio::test]
async fn patch_back_to_uncategorized_is_allowed() {
    let (app, _, _tmp) = test_app().await;

    create_category(&app, "A").await;
    create_product(&app, "111", "Tape", Some("A")).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/products/111",
        Some(json!({ "category": "Uncategorized" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "Uncategorized");
}
