//! Analytics API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::ProductRepository;
use crate::utils::AppResult;
use shared::AnalyticsSummary;

/// How many recently-added products the dashboard shows
const RECENT_LIMIT: usize = 5;

/// GET /api/analytics - 统计聚合 (只读)
///
/// 返回按分类的商品计数和最近入库的 5 个商品 (新的在前)。
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<AnalyticsSummary>> {
    let repo = ProductRepository::new(state.db.clone());

    let category_counts = repo.count_by_category().await?;
    let recent_products = repo.find_recent(RECENT_LIMIT).await?;

    Ok(Json(AnalyticsSummary {
        category_counts,
        recent_products,
    }))
}
