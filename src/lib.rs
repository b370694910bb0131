// lib.rs - Library interface for the webseed editor

pub mod bencode;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod file_io;
pub mod torrent;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for easier testing
pub use bencode::{decode, encode_bvalue, BValue, DecodeError};
pub use config::{Config, Mode, UsageError};
pub use engine::{report, run, Outcome};
pub use error::EditError;
pub use torrent::{
    add_webseed, calculate_info_hash, list_webseeds, remove_webseed, AddResult, FileEntry,
    FileLayout, ProjectionError, RemoveResult, Torrent, TorrentInfo,
};
