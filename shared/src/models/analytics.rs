//! Analytics aggregate types

use super::Product;
use serde::{Deserialize, Serialize};

/// Per-category product count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregate read returned by `GET /api/analytics`
///
/// `category_counts` sums to the total product count; `recent_products`
/// holds at most 5 entries, most-recently-inserted first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub category_counts: Vec<CategoryCount>,
    pub recent_products: Vec<Product>,
}
