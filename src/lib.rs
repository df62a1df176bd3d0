//! Sparkify warehouse ETL
//!
//! Batch pipeline that loads a song catalog and playback event logs (both
//! JSON Lines files) into a star-schema analytics database: song, artist,
//! time and user dimensions plus a songplay fact table.

pub mod error;
pub mod jsonl;
pub mod pipeline;
pub mod records;
pub mod rounding;
pub mod warehouse;

pub use error::EtlError;
pub use pipeline::{process_catalog_file, process_log_file, process_directory, run};
pub use warehouse::{MemoryWarehouse, SqliteWarehouse, Warehouse};
