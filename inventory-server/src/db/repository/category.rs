//! Category Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::CategoryRecord;
use shared::Category;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let records: Vec<CategoryRecord> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY name")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Find category by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let record: Option<CategoryRecord> = self.base.db().select((TABLE, name)).await?;
        Ok(record.map(Into::into))
    }

    /// Create a new category (record key = name, unique index as backstop)
    pub async fn create(&self, name: String) -> RepoResult<Category> {
        if self.find_by_name(&name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                name
            )));
        }

        let created: Result<Option<CategoryRecord>, surrealdb::Error> = self
            .base
            .db()
            .create((TABLE, name.as_str()))
            .content(CategoryRecord::new(name.clone()))
            .await;

        match created {
            Ok(Some(r)) => Ok(r.into()),
            Ok(None) => Err(RepoError::Database("Failed to create category".to_string())),
            Err(e) => {
                // Racing create of the same name loses to the record key
                if self.find_by_name(&name).await?.is_some() {
                    Err(RepoError::Duplicate(format!(
                        "Category '{}' already exists",
                        name
                    )))
                } else {
                    Err(e.into())
                }
            }
        }
    }
}
