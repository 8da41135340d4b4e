//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口 (含按条码查找或创建)
//! - [`categories`] - 分类管理接口
//! - [`analytics`] - 统计聚合接口
//! - [`middleware`] - 请求日志中间件

pub mod analytics;
pub mod categories;
pub mod health;
pub mod middleware;
pub mod products;
