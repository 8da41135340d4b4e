//! Analytics summary: per-category counts and the recent-products window.

mod common;

use common::{barcodes, create_category, create_product, send, test_app};
use http::StatusCode;

#[tokio::test]
async fn empty_database_yields_empty_summary() {
    let (app, _, _tmp) = test_app().await;

    let (status, body) = send(&app, "GET", "/api/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["categoryCounts"].as_array().unwrap().is_empty());
    assert!(body["recentProducts"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn counts_group_by_category_and_recent_is_newest_first() {
    let (app, _, _tmp) = test_app().await;

    create_category(&app, "A").await;
    create_category(&app, "B").await;
    create_product(&app, "111", "First", Some("A")).await;
    create_product(&app, "222", "Second", Some("A")).await;
    create_product(&app, "333", "Third", Some("B")).await;

    let (status, body) = send(&app, "GET", "/api/analytics", None).await;
    assert_eq!(status, StatusCode::OK);

    let counts: Vec<(String, i64)> = body["categoryCounts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["category"].as_str().unwrap().to_string(),
                c["count"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(counts.len(), 2);
    assert!(counts.contains(&("A".to_string(), 2)));
    assert!(counts.contains(&("B".to_string(), 1)));

    assert_eq!(barcodes(&body["recentProducts"]), vec!["333", "222", "111"]);
}

#[tokio::test]
async fn recent_window_is_capped_at_five() {
    let (app, _, _tmp) = test_app().await;

    for i in 1..=7 {
        create_product(&app, &format!("{i:03}"), &format!("Item {i}"), None).await;
    }

    let (_, body) = send(&app, "GET", "/api/analytics", None).await;
    assert_eq!(
        barcodes(&body["recentProducts"]),
        vec!["007", "006", "005", "004", "003"]
    );

    let counts = body["categoryCounts"].as_array().unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0]["category"], "Uncategorized");
    assert_eq!(counts[0]["count"], 7);
}
