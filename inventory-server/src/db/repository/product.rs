//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::ProductRecord;
use shared::{CategoryCount, Product};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn thing(barcode: &str) -> RecordId {
        RecordId::from_table_key(TABLE, barcode)
    }

    /// Find all products in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let records: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at")
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Find products whose category equals `category` (case-sensitive exact match)
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Product>> {
        let records: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE category = $category ORDER BY created_at")
            .bind(("category", category.to_string()))
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Point lookup by barcode
    pub async fn find_by_barcode(&self, barcode: &str) -> RepoResult<Option<Product>> {
        let record: Option<ProductRecord> = self.base.db().select((TABLE, barcode)).await?;
        Ok(record.map(Into::into))
    }

    /// Create a new product; the barcode is the record key
    ///
    /// A second insert of the same barcode fails on the record id, never
    /// producing a second document.
    pub async fn create(&self, record: ProductRecord) -> RepoResult<Product> {
        let barcode = record.barcode.clone();
        let created: Result<Option<ProductRecord>, surrealdb::Error> = self
            .base
            .db()
            .create((TABLE, barcode.as_str()))
            .content(record)
            .await;

        match created {
            Ok(Some(r)) => Ok(r.into()),
            Ok(None) => Err(RepoError::Database("Failed to create product".to_string())),
            Err(e) => {
                // 区分 "已存在" 和真正的存储故障
                if self.find_by_barcode(&barcode).await?.is_some() {
                    Err(RepoError::Duplicate(format!(
                        "Product '{}' already exists",
                        barcode
                    )))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    /// Find-or-create keyed by barcode
    ///
    /// Returns the stored record and whether this call created it. Two
    /// sessions racing to create the same never-seen barcode both land here;
    /// the loser's insert conflicts on the record key and is resolved by
    /// re-reading the winner's document (insert-conflict-as-success).
    pub async fn find_or_create(&self, record: ProductRecord) -> RepoResult<(Product, bool)> {
        let barcode = record.barcode.clone();
        if let Some(existing) = self.find_by_barcode(&barcode).await? {
            return Ok((existing, false));
        }

        match self.create(record).await {
            Ok(created) => Ok((created, true)),
            Err(RepoError::Duplicate(_)) => {
                let existing = self.find_by_barcode(&barcode).await?.ok_or_else(|| {
                    RepoError::Database(format!("Product '{}' vanished after conflict", barcode))
                })?;
                Ok((existing, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Reassign a product's category; touches no other field
    pub async fn update_category(&self, barcode: &str, category: &str) -> RepoResult<Product> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET category = $category RETURN AFTER")
            .bind(("thing", Self::thing(barcode)))
            .bind(("category", category.to_string()))
            .await?;
        let records: Vec<ProductRecord> = result.take(0)?;
        records
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or_else(|| RepoError::NotFound(format!("Product '{}' not found", barcode)))
    }

    /// The `limit` most recently inserted products, newest first
    pub async fn find_recent(&self, limit: usize) -> RepoResult<Vec<Product>> {
        let records: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit as i64))
            .await?
            .take(0)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Per-category product counts
    pub async fn count_by_category(&self) -> RepoResult<Vec<CategoryCount>> {
        let counts: Vec<CategoryCount> = self
            .base
            .db()
            .query("SELECT category, count() AS count FROM product GROUP BY category")
            .await?
            .take(0)?;
        Ok(counts)
    }
}
