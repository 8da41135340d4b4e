//! Category API Handlers

use axum::{Json, extract::State};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};
use shared::{Category, CategoryCreate, UNCATEGORIZED};

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories))
}

/// POST /api/categories - 创建分类
///
/// "Uncategorized" 是客户端常量，不允许入库；重复名称返回 409。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    payload.validate()?;

    if payload.name == UNCATEGORIZED {
        return Err(AppError::validation(format!(
            "'{}' is reserved",
            UNCATEGORIZED
        )));
    }

    let repo = CategoryRepository::new(state.db.clone());
    let category = repo.create(payload.name).await?;

    Ok(Json(category))
}
