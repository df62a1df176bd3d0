//! Song catalog rows and the dimension records derived from them.

use serde::Deserialize;

/// One raw record of a catalog file.
///
/// A catalog file carries exactly one of these, describing one song and the
/// artist that recorded it. Location and coordinates are frequently absent.
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct CatalogRow {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub year: i32,
    pub duration: f64,
    pub artist_location: Option<String>,
    pub artist_latitude: Option<f64>,
    pub artist_longitude: Option<f64>,
}

/// One row of the song dimension. Duration is whole seconds, ceiled.
#[derive(Clone, Debug, PartialEq)]
pub struct SongRecord {
    pub song_id: String,
    pub title: String,
    pub artist_id: String,
    pub year: i32,
    pub duration: i64,
}

/// One row of the artist dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtistRecord {
    pub artist_id: String,
    pub name: String,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
