//! Dimension extraction: projections from raw rows to dimension records.

use crate::records::{
    ArtistRecord, CatalogRow, EventRow, Gender, SongRecord, TimeRecord, UserRecord, NEXT_SONG,
};
use crate::rounding::ceil_seconds;

/// Whether a log row is an actual playback event. Everything else is
/// navigation or auth traffic and is dropped entirely.
pub fn is_playback(row: &EventRow) -> bool {
    row.page == NEXT_SONG
}

pub fn extract_song(row: &CatalogRow) -> SongRecord {
    SongRecord {
        song_id: row.song_id.clone(),
        title: row.title.clone(),
        artist_id: row.artist_id.clone(),
        year: row.year,
        duration: ceil_seconds(row.duration),
    }
}

pub fn extract_artist(row: &CatalogRow) -> ArtistRecord {
    ArtistRecord {
        artist_id: row.artist_id.clone(),
        name: row.artist_name.clone(),
        location: row.artist_location.clone(),
        latitude: row.artist_latitude,
        longitude: row.artist_longitude,
    }
}

/// Decompose the row's timestamp. `None` only for timestamps outside the
/// representable calendar range, which the caller treats as a parse failure.
pub fn extract_time(row: &EventRow) -> Option<TimeRecord> {
    TimeRecord::from_epoch_millis(row.ts)
}

pub fn extract_user(row: &EventRow) -> UserRecord {
    UserRecord {
        user_id: row.user_id.clone(),
        first_name: row.first_name.clone().unwrap_or_default(),
        last_name: row.last_name.clone().unwrap_or_default(),
        gender: row.gender.unwrap_or(Gender::Unknown),
        level: row.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Level;

    fn catalog_row() -> CatalogRow {
        CatalogRow {
            song_id: "SOMZWCG12A8C13C480".to_owned(),
            title: "I Didn't Mean To".to_owned(),
            artist_id: "ARD7TVE1187B99BFB1".to_owned(),
            artist_name: "Casual".to_owned(),
            year: 0,
            duration: 218.93179,
            artist_location: Some("California - LA".to_owned()),
            artist_latitude: None,
            artist_longitude: None,
        }
    }

    fn event_row(page: &str) -> EventRow {
        EventRow {
            ts: 1541984258796,
            page: page.to_owned(),
            user_id: "73".to_owned(),
            first_name: Some("Jacob".to_owned()),
            last_name: Some("Klein".to_owned()),
            gender: Some(Gender::M),
            level: Level::Paid,
            song: Some("Ain't No Sunshine".to_owned()),
            artist: Some("Sydney Youngblood".to_owned()),
            length: Some(238.07955),
            session_id: 954,
            location: None,
            user_agent: None,
        }
    }

    #[test]
    fn song_fields_are_verbatim_except_ceiled_duration() {
        let song = extract_song(&catalog_row());
        assert_eq!(
            song,
            SongRecord {
                song_id: "SOMZWCG12A8C13C480".to_owned(),
                title: "I Didn't Mean To".to_owned(),
                artist_id: "ARD7TVE1187B99BFB1".to_owned(),
                year: 0,
                duration: 219,
            }
        );
    }

    #[test]
    fn artist_keeps_nullable_fields_as_none() {
        let artist = extract_artist(&catalog_row());
        assert_eq!(artist.name, "Casual");
        assert_eq!(artist.location.as_deref(), Some("California - LA"));
        assert_eq!(artist.latitude, None);
        assert_eq!(artist.longitude, None);
    }

    #[test]
    fn only_next_song_rows_are_playback() {
        assert!(is_playback(&event_row("NextSong")));
        assert!(!is_playback(&event_row("Home")));
        assert!(!is_playback(&event_row("Logout")));
        // Case sensitive sentinel
        assert!(!is_playback(&event_row("nextsong")));
    }

    #[test]
    fn user_snapshot_carries_level_of_the_row() {
        let user = extract_user(&event_row("NextSong"));
        assert_eq!(
            user,
            UserRecord {
                user_id: "73".to_owned(),
                first_name: "Jacob".to_owned(),
                last_name: "Klein".to_owned(),
                gender: Gender::M,
                level: Level::Paid,
            }
        );
    }

    #[test]
    fn time_extraction_uses_the_event_timestamp() {
        let time = extract_time(&event_row("NextSong")).unwrap();
        assert_eq!(time.epoch_millis(), 1541984258796);
        assert_eq!(time.year, 2018);
    }
}
