pub mod error;
pub mod infohash;
pub mod metadata;
pub mod webseed;

pub use error::ProjectionError;
pub use infohash::calculate_info_hash;
pub use metadata::{FileEntry, FileLayout, Torrent, TorrentInfo};
pub use webseed::{add_webseed, list_webseeds, remove_webseed, AddResult, RemoveResult};
