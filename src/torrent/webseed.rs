//! Editing of the `url-list` field (BEP 19 webseeds).
//!
//! URLs are kept and compared as raw bytes. No charset is assumed and no
//! normalization of case, scheme or trailing slashes is attempted, so two URLs
//! that differ only in such details are distinct entries.

use crate::bencode::BValue;
use crate::torrent::error::ProjectionError;
use crate::torrent::metadata::{byte_list, expect_bytes};
use crate::torrent::Torrent;

const FIELD: &str = "url-list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveResult {
    Removed,
    NotFound,
}

/// The webseed list plus the raw `url-list` node it was read from.
///
/// Until a URL is added or removed the original node is written back as is,
/// which keeps a single-string `url-list` (or a missing one) unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct WebSeeds {
    urls: Vec<Vec<u8>>,
    original: Option<BValue>,
    modified: bool,
}

impl WebSeeds {
    pub(crate) fn from_field(value: Option<BValue>) -> Result<Self, ProjectionError> {
        let urls: Vec<Vec<u8>> = match &value {
            None => Vec::new(),
            // Some clients write an empty string when there are no webseeds.
            Some(BValue::ByteString(bytes)) if bytes.is_empty() => Vec::new(),
            Some(BValue::ByteString(single)) => vec![single.clone()],
            Some(BValue::List(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| expect_bytes(item.clone(), &format!("{}[{}]", FIELD, i)))
                .collect::<Result<_, _>>()?,
            Some(other) => {
                return Err(ProjectionError::WrongType {
                    field: FIELD.to_string(),
                    expected: "a list of URLs",
                    found: other.kind(),
                })
            }
        };

        Ok(WebSeeds {
            urls,
            original: value,
            modified: false,
        })
    }

    /// The value to store under `url-list`, or `None` to leave the key out.
    pub(crate) fn to_field(&self) -> Option<BValue> {
        if self.modified {
            Some(byte_list(&self.urls))
        } else {
            self.original.clone()
        }
    }

    pub(crate) fn is_modified(&self) -> bool {
        self.modified
    }
}

/// Appends `url` unless an identical entry already exists.
pub fn add_webseed(torrent: &mut Torrent, url: &str) -> AddResult {
    let seeds = &mut torrent.web_seeds;
    if seeds.urls.iter().any(|existing| existing == url.as_bytes()) {
        return AddResult::AlreadyPresent;
    }
    seeds.urls.push(url.as_bytes().to_vec());
    seeds.modified = true;
    AddResult::Added
}

/// Removes the first entry equal to `url`, keeping the others in order.
pub fn remove_webseed(torrent: &mut Torrent, url: &str) -> RemoveResult {
    let seeds = &mut torrent.web_seeds;
    match seeds.urls.iter().position(|existing| existing == url.as_bytes()) {
        Some(index) => {
            seeds.urls.remove(index);
            seeds.modified = true;
            RemoveResult::Removed
        }
        None => RemoveResult::NotFound,
    }
}

/// The webseed URLs as stored, in file order.
pub fn list_webseeds(torrent: &Torrent) -> &[Vec<u8>] {
    &torrent.web_seeds.urls
}
