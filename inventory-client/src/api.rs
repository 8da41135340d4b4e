//! API seam between the views and the transport
//!
//! 视图层只依赖这个 trait，测试用内存假实现，运行时用 [`crate::HttpClient`]。

use async_trait::async_trait;
use shared::{AnalyticsSummary, Category, Product, ProductCreate};

use crate::ClientResult;

/// Operations the inventory server exposes, one method per route.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// GET /api/products[?category=...]
    async fn list_products(&self, category: Option<&str>) -> ClientResult<Vec<Product>>;

    /// POST /api/products
    async fn create_product(&self, payload: &ProductCreate) -> ClientResult<Product>;

    /// GET /api/products/{barcode} (find-or-create)
    async fn lookup_barcode(&self, barcode: &str) -> ClientResult<Product>;

    /// PATCH /api/products/{barcode}
    async fn update_category(&self, barcode: &str, category: &str) -> ClientResult<Product>;

    /// GET /api/categories
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// POST /api/categories
    async fn create_category(&self, name: &str) -> ClientResult<Category>;

    /// GET /api/analytics
    async fn analytics(&self) -> ClientResult<AnalyticsSummary>;
}
