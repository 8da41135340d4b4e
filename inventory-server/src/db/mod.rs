//! Database Module
//!
//! Handles the embedded SurrealDB connection and collection definitions

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

/// Database service — owns the embedded SurrealDB handle
///
/// Constructed explicitly during startup and injected into `ServerState`;
/// nothing reaches the connection through ambient global state.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and define the schema
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns("inventory")
            .use_db("inventory")
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database connection established (SurrealDB RocksDB)");

        Ok(Self { db })
    }

    /// Define collections and unique indexes
    ///
    /// `product` is keyed by barcode (the record id), with a unique index as
    /// a backstop; `category` carries a unique index on name so racing
    /// creates of the same name cannot produce duplicates.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            "
            DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS product_barcode ON product FIELDS barcode UNIQUE;
            DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS category_name ON category FIELDS name UNIQUE;
            ",
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        Ok(())
    }
}
