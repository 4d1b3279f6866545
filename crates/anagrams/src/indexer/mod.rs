//! indexer module
//!
//! Creates and manages the tantivy index that stores word records.

pub mod index_manager;
pub mod report;
pub mod schema_builder;

/// Re-export major types
pub use index_manager::IndexManager;
pub use report::SaveReport;
pub use schema_builder::{SchemaFields, build_schema};
