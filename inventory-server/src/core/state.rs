use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::services::{HttpProductDataSource, ProductDataSource};

/// 服务器状态 - 持有所有依赖的共享引用
///
/// ServerState 持有显式构造、注入的依赖 (数据库、上游数据源)，
/// 处理器通过 axum `State` 提取，不存在任何进程级全局连接。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | upstream | Arc<dyn ProductDataSource> | 上游商品数据源 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// 上游商品数据源 (条码查询缺失时咨询)
    pub upstream: Arc<dyn ProductDataSource>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试时配合内存数据源使用)
    pub fn new(config: Config, db: Surreal<Db>, upstream: Arc<dyn ProductDataSource>) -> Self {
        Self {
            config,
            db,
            upstream,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据库 (work_dir/database/inventory.db，含集合定义和唯一索引)
    /// 2. 上游数据源 HTTP 客户端
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).expect("Failed to create database directory");
        let db_path = db_dir.join("inventory.db");

        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let upstream = Arc::new(HttpProductDataSource::new(
            config.upstream_api_url.clone(),
            config.request_timeout_ms,
        ));

        Self::new(config.clone(), db_service.db, upstream)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
