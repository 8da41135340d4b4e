//! Category Record

use serde::{Deserialize, Serialize};
use shared::Category;
use surrealdb::RecordId;

/// Category as stored in the `category` collection (record id = name)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(skip_serializing, default)]
    pub id: Option<RecordId>,
    pub name: String,
}

impl CategoryRecord {
    pub fn new(name: String) -> Self {
        Self { id: None, name }
    }
}

impl From<CategoryRecord> for Category {
    fn from(r: CategoryRecord) -> Self {
        Category { name: r.name }
    }
}
