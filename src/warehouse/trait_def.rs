//! Warehouse trait definition.
//!
//! This trait is the seam between the transformation pipeline and whatever
//! database actually holds the star schema. The pipeline only ever appends
//! records, resolves one lookup, and commits once per input file.

use crate::records::{ArtistRecord, SongRecord, SongplayFact, TimeRecord, UserRecord};
use thiserror::Error;

/// Errors surfaced by a warehouse backend. Constraint violations and
/// connectivity failures abort the run; there is no retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open warehouse database at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Row counts per warehouse table, for the end-of-run summary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub songs: usize,
    pub artists: usize,
    pub time: usize,
    pub users: usize,
    pub songplays: usize,
}

/// Storage backend for the star schema.
///
/// Duplicate handling is the implementation's concern: the pipeline emits a
/// record per source row and does not deduplicate. All work between two
/// `commit` calls forms one unit; an implementation must not make rows
/// durable before the commit that covers them.
pub trait Warehouse {
    fn insert_song(&mut self, record: &SongRecord) -> Result<(), StoreError>;

    fn insert_artist(&mut self, record: &ArtistRecord) -> Result<(), StoreError>;

    fn insert_time(&mut self, record: &TimeRecord) -> Result<(), StoreError>;

    fn insert_user(&mut self, record: &UserRecord) -> Result<(), StoreError>;

    fn insert_songplay(&mut self, record: &SongplayFact) -> Result<(), StoreError>;

    /// Resolve a played track to its dimension keys by exact match on
    /// title, artist name and whole-second duration. Returns the first
    /// match in implementation-defined order; callers must not depend on
    /// the tie-break between ambiguous matches.
    fn find_song(
        &mut self,
        title: &str,
        artist_name: &str,
        duration: i64,
    ) -> Result<Option<(String, String)>, StoreError>;

    /// Commit the current unit of work. The batch driver calls this once
    /// per input file.
    fn commit(&mut self) -> Result<(), StoreError>;

    /// Row counts per table, for the end-of-run summary. Meaningful after
    /// the final commit; mid-unit visibility of staged rows is
    /// implementation-defined.
    fn counts(&mut self) -> Result<TableCounts, StoreError>;
}
