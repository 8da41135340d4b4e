//! Inventory Server - 条码库存管理服务
//!
//! # 架构概述
//!
//! 本模块是 Inventory API 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (product / category 两个集合)
//! - **HTTP API** (`api`): RESTful API 接口 (商品、分类、统计)
//! - **上游数据源** (`services/upstream`): 条码元数据查询客户端
//!
//! # 模块结构
//!
//! ```text
//! inventory-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 上游商品数据源
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState, build_app};
pub use services::{HttpProductDataSource, ProductDataSource, UpstreamProduct};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                      __
   /  _/___ _   _____  ____  / /_____  _______  __
   / // __ \ | / / _ \/ __ \/ __/ __ \/ ___/ / / /
 _/ // / / / |/ /  __/ / / / /_/ /_/ / /  / /_/ /
/___/_/ /_/|___/\___/_/ /_/\__/\____/_/   \__, /
                                         /____/
    "#
    );
}
