mod catalog;
mod events;
mod time;

pub use catalog::{ArtistRecord, CatalogRow, SongRecord};
pub use events::{EventRow, Gender, Level, SongplayFact, UserRecord, NEXT_SONG};
pub use time::TimeRecord;
