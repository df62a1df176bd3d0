//! The persistence collaborator: the analytics warehouse the pipeline
//! writes into and resolves songplay lookups against.

pub mod memory_store;
pub mod schema;
pub mod sqlite_store;
pub mod trait_def;

pub use memory_store::MemoryWarehouse;
pub use sqlite_store::SqliteWarehouse;
pub use trait_def::{StoreError, TableCounts, Warehouse};
