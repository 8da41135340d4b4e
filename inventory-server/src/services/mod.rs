//! 服务模块 - 外部协作方客户端

pub mod upstream;

pub use upstream::{HttpProductDataSource, ProductDataSource, UpstreamError, UpstreamProduct};
