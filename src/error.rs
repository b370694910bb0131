use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bencode::DecodeError;
use crate::torrent::ProjectionError;

/// Fatal failures of a single edit. None of them are retried.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a valid bencoded file")]
    Decode(#[from] DecodeError),

    #[error("not a valid torrent")]
    Projection(#[from] ProjectionError),

    #[error("info hash changed from {before} to {after}, refusing to write")]
    InfoHashChanged { before: String, after: String },
}

impl EditError {
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        EditError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}
