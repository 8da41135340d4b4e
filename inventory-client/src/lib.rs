//! Inventory Client - HTTP client and view state for the inventory server
//!
//! 提供三块能力:
//! - [`HttpClient`]: REST 调用封装 (商品 / 分类 / 统计)
//! - [`BoardView`] / [`AnalyticsView`]: 看板与统计页的状态机
//! - [`ScanPipeline`]: 图片 → 条码 → 商品 的扫描管线

pub mod analytics;
pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod http;
pub mod scan;

pub use analytics::AnalyticsView;
pub use api::InventoryApi;
pub use board::{BoardView, DragEnd};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use scan::{BarcodeExtractor, ScanError, ScanPipeline, SymbolDecoder};

// Re-export shared types for convenience
pub use shared::{AnalyticsSummary, Category, CategoryCount, Product, ProductCreate, UNCATEGORIZED};
