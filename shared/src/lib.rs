//! Shared types for the barcode inventory system
//!
//! Common types used by both the server and the client crates:
//! wire models, the uniform failure envelope, and constants.

pub mod error;
pub mod models;

// Re-exports
pub use error::ErrorBody;
pub use models::{
    AnalyticsSummary, Category, CategoryCount, CategoryCreate, Product, ProductCreate,
    ProductPatch,
};
pub use serde::{Deserialize, Serialize};

/// 伪分类 - 客户端常量，永不入库
///
/// Products land here on first scan and whenever no category is given.
pub const UNCATEGORIZED: &str = "Uncategorized";
