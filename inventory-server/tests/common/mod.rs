//! Shared test fixtures: tempdir-backed database, mock upstream source,
//! and a oneshot request helper against the assembled router.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use tower::ServiceExt;

use inventory_server::core::{Config, ServerState};
use inventory_server::db::DbService;
use inventory_server::services::{ProductDataSource, UpstreamError, UpstreamProduct};
use inventory_server::build_app;

/// In-memory upstream catalog; counts how often it is consulted.
pub struct MockSource {
    catalog: HashMap<String, UpstreamProduct>,
    calls: AtomicUsize,
    unreachable: bool,
}

impl MockSource {
    pub fn empty() -> Self {
        Self {
            catalog: HashMap::new(),
            calls: AtomicUsize::new(0),
            unreachable: false,
        }
    }

    pub fn with_catalog() -> Self {
        let mut catalog = HashMap::new();
        catalog.insert(
            "4006381333931".to_string(),
            UpstreamProduct {
                description: Some("Stabilo Point 88 Fineliner".to_string()),
                price: Some(Decimal::new(199, 2)),
            },
        );
        Self {
            catalog,
            calls: AtomicUsize::new(0),
            unreachable: false,
        }
    }

    /// Every fetch fails, as if the catalog service were down.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::empty()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductDataSource for MockSource {
    async fn fetch(&self, barcode: &str) -> Result<Option<UpstreamProduct>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(UpstreamError::Status(503));
        }
        Ok(self.catalog.get(barcode).cloned())
    }
}

/// Fresh router over a tempdir-backed database and a mock upstream.
///
/// The TempDir must stay alive for the duration of the test.
pub async fn test_app() -> (Router, Arc<MockSource>, tempfile::TempDir) {
    test_app_with_source(MockSource::with_catalog()).await
}

/// Like [`test_app`], with a caller-chosen upstream double.
pub async fn test_app_with_source(
    source: MockSource,
) -> (Router, Arc<MockSource>, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("inventory.db");
    let db = DbService::new(&db_path.to_string_lossy()).await.unwrap();

    let upstream = Arc::new(source);
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::new(config, db.db, upstream.clone());

    (build_app().with_state(state), upstream, tmp)
}

/// Fire a single request at the router and return (status, parsed body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// POST /api/categories helper
pub async fn create_category(app: &Router, name: &str) {
    let (status, _) = send(
        app,
        "POST",
        "/api/categories",
        Some(serde_json::json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "failed to create category {name}");
}

/// POST /api/products helper
pub async fn create_product(app: &Router, barcode: &str, name: &str, category: Option<&str>) {
    let mut body = serde_json::json!({ "barcode": barcode, "name": name });
    if let Some(category) = category {
        body["category"] = serde_json::Value::String(category.to_string());
    }
    let (status, _) = send(app, "POST", "/api/products", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "failed to create product {barcode}");
}

/// Extract the barcodes of a product list response, in order.
pub fn barcodes(list: &serde_json::Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|p| p["barcode"].as_str().unwrap().to_string())
        .collect()
}
