//! User session event rows and the records derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Page value marking an actual playback event. Every other page value
/// (navigation, auth, settings) produces no output at all.
pub const NEXT_SONG: &str = "NextSong";

/// One raw record of a session log file.
///
/// Only `ts`, `sessionId` and `userId` are required to be non-null; the
/// remaining fields are null on non-playback rows (and occasionally on
/// anonymous sessions).
#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct EventRow {
    pub ts: i64,
    pub page: String,
    #[serde(rename = "userId", deserialize_with = "user_id_string")]
    pub user_id: String,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub level: Level,
    pub song: Option<String>,
    pub artist: Option<String>,
    pub length: Option<f64>,
    #[serde(rename = "sessionId")]
    pub session_id: i64,
    pub location: Option<String>,
    #[serde(rename = "userAgent")]
    pub user_agent: Option<String>,
}

/// The logs encode `userId` both as a JSON number and as a string,
/// depending on the exporter version. Normalize to a string either way.
fn user_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
    #[serde(other)]
    Unknown,
}

impl Gender {
    /// SQL text representation; unknown gender is stored as NULL.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Gender::M => Some("M"),
            Gender::F => Some("F"),
            Gender::Unknown => None,
        }
    }
}

/// Subscription plan of a user at the moment of one event.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Free,
    Paid,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Free => "free",
            Level::Paid => "paid",
        }
    }
}

/// One row of the user dimension.
///
/// A user's level changes over time, so every playback row produces a fresh
/// snapshot; the store decides whether that appends or upserts.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub level: Level,
}

/// One row of the songplay fact table.
///
/// `song_id`/`artist_id` are null exactly when the catalog lookup found no
/// match for the played track, which is the common case.
#[derive(Clone, Debug, PartialEq)]
pub struct SongplayFact {
    pub start_time: DateTime<Utc>,
    pub user_id: String,
    pub level: Level,
    pub song_id: Option<String>,
    pub artist_id: Option<String>,
    pub session_id: i64,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}
