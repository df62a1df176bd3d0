//! JSON Lines file reading.
//!
//! Input files carry one JSON object per line. `JsonLines` decodes them
//! lazily into typed rows; any unreadable line aborts the file.

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a single input file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: invalid record: {source}", .path.display())]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: timestamp {millis} ms is outside the representable range", .path.display())]
    TimestampOutOfRange { path: PathBuf, millis: i64 },
}

/// Lazy iterator over the records of a JSON Lines file.
///
/// Yields one `T` per non-blank line, in file order. Re-opening the file
/// restarts the sequence from the beginning.
pub struct JsonLines<T> {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    line_no: usize,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonLines<T> {
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        let file = File::open(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            lines: BufReader::new(file).lines(),
            line_no: 0,
            _marker: PhantomData,
        })
    }
}

impl<T: DeserializeOwned> Iterator for JsonLines<T> {
    type Item = Result<T, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(ParseError::Io {
                        path: self.path.clone(),
                        source,
                    }))
                }
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|source| ParseError::Json {
                path: self.path.clone(),
                line: self.line_no,
                source,
            }));
        }
    }
}

/// Read every record of a JSON Lines file eagerly.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ParseError> {
    JsonLines::open(path)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
        n: i64,
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_one_record_per_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "rows.json",
            "{\"id\": \"a\", \"n\": 1}\n{\"id\": \"b\", \"n\": 2}\n",
        );

        let rows: Vec<Row> = read_rows(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                Row {
                    id: "a".to_owned(),
                    n: 1
                },
                Row {
                    id: "b".to_owned(),
                    n: 2
                },
            ]
        );
    }

    #[test]
    fn skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "rows.json", "{\"id\": \"a\", \"n\": 1}\n\n   \n");

        let rows: Vec<Row> = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn reports_line_number_of_bad_record() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "rows.json",
            "{\"id\": \"a\", \"n\": 1}\nnot json at all\n",
        );

        let err = read_rows::<Row>(&path).unwrap_err();
        match err {
            ParseError::Json { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_field_is_a_parse_failure() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "rows.json", "{\"id\": \"a\"}\n");

        assert!(read_rows::<Row>(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_rows::<Row>(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
