//! Per-file pipelines and the run orchestration.
//!
//! A catalog file contributes one song and one artist dimension row. A log
//! file contributes, for each playback row, a time row, a user snapshot and
//! a resolved songplay fact. Rows are processed in source order and a file
//! is committed as one unit of work.

mod driver;
mod extract;
mod resolve;

pub use driver::{discover_files, process_directory};
pub use extract::{extract_artist, extract_song, extract_time, extract_user, is_playback};
pub use resolve::resolve_songplay;

use crate::error::EtlError;
use crate::jsonl::{JsonLines, ParseError};
use crate::records::{CatalogRow, EventRow};
use crate::warehouse::Warehouse;
use std::path::Path;

/// Process one song catalog file: insert the song and artist it describes.
pub fn process_catalog_file<W: Warehouse>(store: &mut W, path: &Path) -> Result<(), EtlError> {
    for row in JsonLines::<CatalogRow>::open(path)? {
        let row = row?;
        store.insert_song(&extract_song(&row))?;
        store.insert_artist(&extract_artist(&row))?;
    }
    Ok(())
}

/// Process one session log file: for every playback row, insert its time
/// decomposition, a user snapshot and the resolved songplay fact.
pub fn process_log_file<W: Warehouse>(store: &mut W, path: &Path) -> Result<(), EtlError> {
    for row in JsonLines::<EventRow>::open(path)? {
        let row = row?;
        if !is_playback(&row) {
            continue;
        }
        let time = extract_time(&row).ok_or_else(|| ParseError::TimestampOutOfRange {
            path: path.to_path_buf(),
            millis: row.ts,
        })?;
        store.insert_time(&time)?;
        store.insert_user(&extract_user(&row))?;
        let fact = resolve_songplay(store, &row, time.start_time)?;
        store.insert_songplay(&fact)?;
    }
    Ok(())
}

/// Full ETL run: the catalog directory pass, then the log directory pass.
/// The catalog pass runs first so that the songplay lookups of the log pass
/// can resolve against it.
pub fn run<W: Warehouse>(
    store: &mut W,
    song_data: &Path,
    log_data: &Path,
) -> Result<(), EtlError> {
    process_directory(store, song_data, process_catalog_file)?;
    process_directory(store, log_data, process_log_file)?;
    Ok(())
}
