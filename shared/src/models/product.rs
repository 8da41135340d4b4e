//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
///
/// `barcode` is the natural key: lookups and updates key off it, never off a
/// store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price, non-negative
    #[serde(default)]
    pub price: Decimal,
    /// Category name (loose reference, defaults to "Uncategorized")
    pub category: String,
    /// Insertion instant, unix microseconds. Drives the recent-products list.
    #[serde(default)]
    pub created_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Option<Decimal>,
    /// Defaults to "Uncategorized" when omitted
    pub category: Option<String>,
}

/// Category reassignment payload (`PATCH /api/products/{barcode}`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductPatch {
    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,
}
