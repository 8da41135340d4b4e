//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::ProductRecord;
use crate::db::repository::{CategoryRepository, ProductRepository};
use crate::utils::{AppError, AppResult};
use shared::{Product, ProductCreate, ProductPatch, UNCATEGORIZED};

/// Query parameters for product listing
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    /// Exact category name filter (case-sensitive)
    pub category: Option<String>,
}

/// 目标分类必须是 "Uncategorized" 或已存在的分类名
///
/// Product.category 与 Category.name 之间没有存储级外键，引用完整性在
/// 此边界强制执行。
async fn ensure_category_exists(state: &ServerState, category: &str) -> AppResult<()> {
    if category == UNCATEGORIZED {
        return Ok(());
    }
    let repo = CategoryRepository::new(state.db.clone());
    if repo.find_by_name(category).await?.is_none() {
        return Err(AppError::business_rule(format!(
            "Category '{}' does not exist",
            category
        )));
    }
    Ok(())
}

/// GET /api/products - 获取商品列表 (可选按分类精确过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.db.clone());
    let products = match query.category.as_deref() {
        Some(category) => repo.find_by_category(category).await?,
        None => repo.find_all().await?,
    };
    Ok(Json(products))
}

/// POST /api/products - 创建商品
///
/// 分类缺省为 "Uncategorized"，价格缺省为 0；重复条码返回 409。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    payload.validate()?;

    let price = payload.price.unwrap_or(Decimal::ZERO);
    if price < Decimal::ZERO {
        return Err(AppError::validation("price must be non-negative"));
    }

    let category = payload
        .category
        .unwrap_or_else(|| UNCATEGORIZED.to_string());
    ensure_category_exists(&state, &category).await?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .create(ProductRecord::new(
            payload.barcode,
            payload.name,
            payload.description,
            price,
            category,
        ))
        .await?;

    Ok(Json(product))
}

/// GET /api/products/:barcode - 按条码查找或创建
///
/// 已知条码直接返回存量记录；未知条码咨询上游数据源后以 "Uncategorized"
/// 落库。操作幂等：同一条码重复查询永远返回首次创建的记录。
pub async fn lookup_or_create(
    State(state): State<ServerState>,
    Path(barcode): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());

    if let Some(existing) = repo.find_by_barcode(&barcode).await? {
        return Ok(Json(existing));
    }

    // 本地缺失 — 定义好的分支，不是错误。咨询上游元数据后落库。
    let metadata = state
        .upstream
        .fetch(&barcode)
        .await
        .map_err(|e| AppError::upstream(e.to_string()))?;

    // 名称缺失时回退 "Unknown Product"，描述保留上游原值 (缺失则为空)
    let (description, price) = match metadata {
        Some(meta) => (
            meta.description.unwrap_or_default(),
            meta.price.unwrap_or(Decimal::ZERO),
        ),
        None => (String::new(), Decimal::ZERO),
    };
    let name = if description.is_empty() {
        "Unknown Product".to_string()
    } else {
        description.clone()
    };

    let record = ProductRecord::new(
        barcode.clone(),
        name,
        description,
        price,
        UNCATEGORIZED.to_string(),
    );

    let (product, created) = repo.find_or_create(record).await?;
    if created {
        tracing::info!(barcode = %barcode, "Product created from upstream lookup");
    }

    Ok(Json(product))
}

/// PATCH /api/products/:barcode - 分类重指派
///
/// 只改 category 一个字段；条码未知返回 404，不创建任何文档。
pub async fn update_category(
    State(state): State<ServerState>,
    Path(barcode): Path<String>,
    Json(payload): Json<ProductPatch>,
) -> AppResult<Json<Product>> {
    payload.validate()?;
    ensure_category_exists(&state, &payload.category).await?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.update_category(&barcode, &payload.category).await?;

    Ok(Json(product))
}
