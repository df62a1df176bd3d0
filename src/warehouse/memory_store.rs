//! In-memory warehouse implementation.
//!
//! Backs the `--dry-run` mode (full parse/transform/resolve pass, nothing
//! written to disk) and the pipeline unit tests. Keeps the same
//! staged-until-commit discipline as the SQLite store so commit-boundary
//! behavior can be asserted on.

use super::trait_def::{StoreError, TableCounts, Warehouse};
use crate::records::{ArtistRecord, SongRecord, SongplayFact, TimeRecord, UserRecord};

#[derive(Clone, Debug, Default)]
struct Rows {
    songs: Vec<SongRecord>,
    artists: Vec<ArtistRecord>,
    time: Vec<TimeRecord>,
    users: Vec<UserRecord>,
    songplays: Vec<SongplayFact>,
}

impl Rows {
    fn append(&mut self, other: &mut Rows) {
        self.songs.append(&mut other.songs);
        self.artists.append(&mut other.artists);
        self.time.append(&mut other.time);
        self.users.append(&mut other.users);
        self.songplays.append(&mut other.songplays);
    }
}

/// Warehouse that keeps everything in vectors, duplicates included.
#[derive(Debug, Default)]
pub struct MemoryWarehouse {
    staged: Rows,
    committed: Rows,
    commits: usize,
}

impl MemoryWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `commit` calls so far, one per processed file.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    pub fn committed_songs(&self) -> &[SongRecord] {
        &self.committed.songs
    }

    pub fn committed_artists(&self) -> &[ArtistRecord] {
        &self.committed.artists
    }

    pub fn committed_time(&self) -> &[TimeRecord] {
        &self.committed.time
    }

    pub fn committed_users(&self) -> &[UserRecord] {
        &self.committed.users
    }

    pub fn committed_songplays(&self) -> &[SongplayFact] {
        &self.committed.songplays
    }
}

impl Warehouse for MemoryWarehouse {
    fn insert_song(&mut self, record: &SongRecord) -> Result<(), StoreError> {
        self.staged.songs.push(record.clone());
        Ok(())
    }

    fn insert_artist(&mut self, record: &ArtistRecord) -> Result<(), StoreError> {
        self.staged.artists.push(record.clone());
        Ok(())
    }

    fn insert_time(&mut self, record: &TimeRecord) -> Result<(), StoreError> {
        self.staged.time.push(record.clone());
        Ok(())
    }

    fn insert_user(&mut self, record: &UserRecord) -> Result<(), StoreError> {
        self.staged.users.push(record.clone());
        Ok(())
    }

    fn insert_songplay(&mut self, record: &SongplayFact) -> Result<(), StoreError> {
        self.staged.songplays.push(record.clone());
        Ok(())
    }

    fn find_song(
        &mut self,
        title: &str,
        artist_name: &str,
        duration: i64,
    ) -> Result<Option<(String, String)>, StoreError> {
        // Same visibility as the SQLite store: staged rows of the current
        // unit of work take part in the lookup.
        let songs = self.committed.songs.iter().chain(self.staged.songs.iter());
        for song in songs {
            if song.title != title || song.duration != duration {
                continue;
            }
            let artist = self
                .committed
                .artists
                .iter()
                .chain(self.staged.artists.iter())
                .find(|a| a.artist_id == song.artist_id && a.name == artist_name);
            if let Some(artist) = artist {
                return Ok(Some((song.song_id.clone(), artist.artist_id.clone())));
            }
        }
        Ok(None)
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        let mut staged = std::mem::take(&mut self.staged);
        self.committed.append(&mut staged);
        self.commits += 1;
        Ok(())
    }

    fn counts(&mut self) -> Result<TableCounts, StoreError> {
        Ok(TableCounts {
            songs: self.committed.songs.len(),
            artists: self.committed.artists.len(),
            time: self.committed.time.len(),
            users: self.committed.users.len(),
            songplays: self.committed.songplays.len(),
        })
    }
}
