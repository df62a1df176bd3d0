//! Canned catalog and log rows shaped like the real dataset.

pub const SONG_1_ID: &str = "SOUPIRU12A6D4FA1E1";
pub const SONG_1_TITLE: &str = "Der Kleine Dompfaff";
pub const ARTIST_1_ID: &str = "ARJIE2Y1187B994AB7";
pub const ARTIST_1_NAME: &str = "Line Renaud";
/// 152.92036 ceiled.
pub const SONG_1_DURATION: i64 = 153;

pub const ARTIST_2_ID: &str = "ARD7TVE1187B99BFB1";

pub const CATALOG_LINE_1: &str = concat!(
    r#"{"num_songs": 1, "song_id": "SOUPIRU12A6D4FA1E1", "title": "Der Kleine Dompfaff", "#,
    r#""artist_id": "ARJIE2Y1187B994AB7", "artist_name": "Line Renaud", "#,
    r#""artist_location": "", "artist_latitude": null, "artist_longitude": null, "#,
    r#""year": 0, "duration": 152.92036}"#
);

pub const CATALOG_LINE_2: &str = concat!(
    r#"{"num_songs": 1, "song_id": "SOMZWCG12A8C13C480", "title": "I Didn't Mean To", "#,
    r#""artist_id": "ARD7TVE1187B99BFB1", "artist_name": "Casual", "#,
    r#""artist_location": "California - LA", "artist_latitude": 34.05, "artist_longitude": -118.24, "#,
    r#""year": 1994, "duration": 218.93179}"#
);

pub fn playback_line(ts: i64, user_id: &str, song: &str, artist: &str, length: f64) -> String {
    format!(
        concat!(
            r#"{{"artist": "{artist}", "auth": "Logged In", "firstName": "Jacob", "gender": "M", "#,
            r#""itemInSession": 53, "lastName": "Klein", "length": {length}, "level": "paid", "#,
            r#""location": "Tampa-St. Petersburg-Clearwater, FL", "method": "PUT", "page": "NextSong", "#,
            r#""registration": 1540558108796.0, "sessionId": 954, "song": "{song}", "status": 200, "#,
            r#""ts": {ts}, "userAgent": "Mozilla/5.0", "userId": "{user_id}"}}"#
        ),
        artist = artist,
        length = length,
        song = song,
        ts = ts,
        user_id = user_id,
    )
}

pub fn navigation_line(ts: i64, user_id: &str, page: &str) -> String {
    format!(
        concat!(
            r#"{{"artist": null, "auth": "Logged In", "firstName": "Jacob", "gender": "M", "#,
            r#""lastName": "Klein", "length": null, "level": "paid", "location": null, "#,
            r#""page": "{page}", "sessionId": 954, "song": null, "status": 200, "#,
            r#""ts": {ts}, "userAgent": null, "userId": "{user_id}"}}"#
        ),
        page = page,
        ts = ts,
        user_id = user_id,
    )
}
