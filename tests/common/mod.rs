//! Shared helpers for the end-to-end pipeline tests.

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// On-disk input layout for one test run: a catalog tree, a log tree and a
/// place for the warehouse database file.
pub struct TestData {
    root: TempDir,
}

impl TestData {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("song_data")).unwrap();
        fs::create_dir_all(root.path().join("log_data")).unwrap();
        Self { root }
    }

    pub fn song_data(&self) -> PathBuf {
        self.root.path().join("song_data")
    }

    pub fn log_data(&self) -> PathBuf {
        self.root.path().join("log_data")
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.path().join("warehouse.db")
    }

    /// Write one catalog file under `song_data`, creating subdirectories
    /// as needed (the real dataset nests files several levels deep).
    pub fn add_catalog_file(&self, rel_path: &str, lines: &[&str]) {
        write_lines(&self.song_data().join(rel_path), lines);
    }

    /// Write one log file under `log_data`.
    pub fn add_log_file(&self, rel_path: &str, lines: &[String]) {
        let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
        write_lines(&self.log_data().join(rel_path), &refs);
    }
}

fn write_lines(path: &Path, lines: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).unwrap();
}

/// Open the warehouse file read-only and run a scalar query against it.
pub fn query_i64(db_path: &Path, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(sql, [], |r| r.get(0)).unwrap()
}

pub fn query_opt_string(db_path: &Path, sql: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).unwrap();
    conn.query_row(sql, [], |r| r.get(0)).unwrap()
}
