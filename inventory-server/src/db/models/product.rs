//! Product Record

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::Product;
use surrealdb::RecordId;

/// Product as stored in the `product` collection
///
/// The record id is `product:⟨barcode⟩` — the barcode is the natural key, so
/// the store itself guarantees at most one record per barcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(skip_serializing, default)]
    pub id: Option<RecordId>,
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    pub category: String,
    /// Insertion instant, unix microseconds
    pub created_at: i64,
}

impl ProductRecord {
    pub fn new(
        barcode: String,
        name: String,
        description: String,
        price: Decimal,
        category: String,
    ) -> Self {
        Self {
            id: None,
            barcode,
            name,
            description,
            price,
            category,
            created_at: chrono::Utc::now().timestamp_micros(),
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Product {
            barcode: r.barcode,
            name: r.name,
            description: r.description,
            price: r.price,
            category: r.category,
            created_at: r.created_at,
        }
    }
}
