//! Batch driver: file discovery, per-file pipeline invocation and the
//! commit-per-file discipline.

use crate::error::EtlError;
use crate::warehouse::Warehouse;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

const INPUT_EXTENSION: &str = "json";

/// Recursively collect every `.json` file under `root`, eagerly.
///
/// Order follows the directory walk and is not guaranteed to be stable
/// across filesystems. An unreadable root or subdirectory aborts discovery.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>, EtlError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| EtlError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().map(|ext| ext == INPUT_EXTENSION) == Some(true)
        {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Run one per-file pipeline over every input file under `root`.
///
/// Each file is fully processed and then committed as one unit of work
/// before the next file is touched. The first failing file aborts the run;
/// files already committed stay durable, the failing file's rows do not
/// (see the store's transaction contract). Returns the number of files
/// processed.
pub fn process_directory<W, F>(
    store: &mut W,
    root: &Path,
    mut process_file: F,
) -> Result<usize, EtlError>
where
    W: Warehouse,
    F: FnMut(&mut W, &Path) -> Result<(), EtlError>,
{
    let files = discover_files(root)?;
    info!("{} files found in {}.", files.len(), root.display());

    for (i, file) in files.iter().enumerate() {
        process_file(store, file)?;
        store.commit()?;
        info!("{}/{} files processed.", i + 1, files.len());
    }
    Ok(files.len())
}
