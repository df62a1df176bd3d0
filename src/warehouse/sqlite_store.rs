//! SQLite-backed warehouse implementation.
//!
//! One connection, one open transaction at all times: `commit` makes the
//! current file's rows durable and begins the next unit of work. If the
//! process dies or errors out mid-file, the open transaction is rolled back
//! when the connection drops, so no partially processed file ever becomes
//! visible.

use super::schema::WAREHOUSE_TABLES;
use super::trait_def::{StoreError, TableCounts, Warehouse};
use crate::records::{ArtistRecord, SongRecord, SongplayFact, TimeRecord, UserRecord};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::info;

// Dimension rows may be emitted repeatedly (the same instant or user recurs
// across log rows); the natural-key conflict clauses make re-insertion a
// no-op, except for users where the latest level snapshot wins.
const INSERT_SONG: &str = "INSERT INTO songs (song_id, title, artist_id, year, duration)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT (song_id) DO NOTHING";

const INSERT_ARTIST: &str = "INSERT INTO artists (artist_id, name, location, latitude, longitude)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT (artist_id) DO NOTHING";

const INSERT_TIME: &str = "INSERT INTO time (start_time, hour, day, week, month, year, weekday)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
     ON CONFLICT (start_time) DO NOTHING";

const INSERT_USER: &str = "INSERT INTO users (user_id, first_name, last_name, gender, level)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT (user_id) DO UPDATE SET level = excluded.level";

const INSERT_SONGPLAY: &str = "INSERT INTO songplays
     (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

const FIND_SONG: &str = "SELECT s.song_id, a.artist_id
     FROM songs s JOIN artists a ON s.artist_id = a.artist_id
     WHERE s.title = ?1 AND a.name = ?2 AND s.duration = ?3
     LIMIT 1";

/// SQLite-backed warehouse.
pub struct SqliteWarehouse {
    conn: Connection,
}

impl SqliteWarehouse {
    /// Open (or create) the warehouse database at `path` and begin the
    /// first unit of work. The schema is created when the database is empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Self::init(conn)
    }

    /// In-memory warehouse, used by tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        create_schema_if_needed(&conn)?;
        conn.execute_batch("BEGIN")?;
        Ok(Self { conn })
    }

    fn count(&self, table: &str) -> Result<usize, StoreError> {
        let count: i64 =
            self.conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
        Ok(count as usize)
    }
}

fn create_schema_if_needed(conn: &Connection) -> Result<(), StoreError> {
    let table_count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |r| r.get(0),
    )?;
    if table_count > 0 {
        return Ok(());
    }
    info!("Creating warehouse schema");
    for table in WAREHOUSE_TABLES {
        table.create(conn)?;
    }
    Ok(())
}

impl Warehouse for SqliteWarehouse {
    fn insert_song(&mut self, record: &SongRecord) -> Result<(), StoreError> {
        self.conn.prepare_cached(INSERT_SONG)?.execute(params![
            record.song_id,
            record.title,
            record.artist_id,
            record.year,
            record.duration,
        ])?;
        Ok(())
    }

    fn insert_artist(&mut self, record: &ArtistRecord) -> Result<(), StoreError> {
        self.conn.prepare_cached(INSERT_ARTIST)?.execute(params![
            record.artist_id,
            record.name,
            record.location,
            record.latitude,
            record.longitude,
        ])?;
        Ok(())
    }

    fn insert_time(&mut self, record: &TimeRecord) -> Result<(), StoreError> {
        self.conn.prepare_cached(INSERT_TIME)?.execute(params![
            record.epoch_millis(),
            record.hour,
            record.day,
            record.week,
            record.month,
            record.year,
            record.weekday,
        ])?;
        Ok(())
    }

    fn insert_user(&mut self, record: &UserRecord) -> Result<(), StoreError> {
        self.conn.prepare_cached(INSERT_USER)?.execute(params![
            record.user_id,
            record.first_name,
            record.last_name,
            record.gender.as_str(),
            record.level.as_str(),
        ])?;
        Ok(())
    }

    fn insert_songplay(&mut self, record: &SongplayFact) -> Result<(), StoreError> {
        self.conn.prepare_cached(INSERT_SONGPLAY)?.execute(params![
            record.start_time.timestamp_millis(),
            record.user_id,
            record.level.as_str(),
            record.song_id,
            record.artist_id,
            record.session_id,
            record.location,
            record.user_agent,
        ])?;
        Ok(())
    }

    fn find_song(
        &mut self,
        title: &str,
        artist_name: &str,
        duration: i64,
    ) -> Result<Option<(String, String)>, StoreError> {
        let mut stmt = self.conn.prepare_cached(FIND_SONG)?;
        let ids = stmt
            .query_row(params![title, artist_name, duration], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .optional()?;
        Ok(ids)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        self.conn.execute_batch("COMMIT; BEGIN;")?;
        Ok(())
    }

    fn counts(&mut self) -> Result<TableCounts, StoreError> {
        Ok(TableCounts {
            songs: self.count("songs")?,
            artists: self.count("artists")?,
            time: self.count("time")?,
            users: self.count("users")?,
            songplays: self.count("songplays")?,
        })
    }
}
