//! Top-level error type for a pipeline run.

use crate::jsonl::ParseError;
use crate::warehouse::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort an ETL run.
///
/// Only lookup misses are recovered from (inside the fact resolver, by
/// substituting null keys); any of these terminates the run so the operator
/// can fix the input and re-run from scratch.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("could not list input files under {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
