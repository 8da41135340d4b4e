//! Wire models shared between server and client

pub mod analytics;
pub mod category;
pub mod product;

pub use analytics::{AnalyticsSummary, CategoryCount};
pub use category::{Category, CategoryCreate};
pub use product::{Product, ProductCreate, ProductPatch};
