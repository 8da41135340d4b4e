//! Database record types
//!
//! Store-side shapes of the wire models: identical fields plus the
//! store-assigned record id, which never leaves the db layer.

pub mod category;
pub mod product;

pub use category::CategoryRecord;
pub use product::ProductRecord;
