//! Fact resolution: mapping a playback row to its dimension keys.

use crate::records::{EventRow, SongplayFact};
use crate::rounding::ceil_seconds;
use crate::warehouse::{StoreError, Warehouse};
use chrono::{DateTime, Utc};

/// Assemble the songplay fact for one playback row, resolving the played
/// track against the song/artist dimensions.
///
/// The lookup matches on song title, artist name and the event length ceiled
/// to whole seconds, the same rounding the catalog durations went through.
/// A miss is the normal case (the catalog rarely contains every played
/// track) and yields null dimension keys; a row missing any of the three
/// lookup attributes is treated the same way.
pub fn resolve_songplay<W: Warehouse + ?Sized>(
    store: &mut W,
    row: &EventRow,
    start_time: DateTime<Utc>,
) -> Result<SongplayFact, StoreError> {
    let ids = match (&row.song, &row.artist, row.length) {
        (Some(song), Some(artist), Some(length)) => {
            store.find_song(song, artist, ceil_seconds(length))?
        }
        _ => None,
    };
    let (song_id, artist_id) = match ids {
        Some((song_id, artist_id)) => (Some(song_id), Some(artist_id)),
        None => (None, None),
    };
    Ok(SongplayFact {
        start_time,
        user_id: row.user_id.clone(),
        level: row.level,
        song_id,
        artist_id,
        session_id: row.session_id,
        location: row.location.clone(),
        user_agent: row.user_agent.clone(),
    })
}
