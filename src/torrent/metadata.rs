use std::{borrow::Cow, collections::BTreeMap};

use crate::bencode::{encode_bvalue, BValue};
use crate::torrent::calculate_info_hash;
use crate::torrent::error::ProjectionError;
use crate::torrent::webseed::WebSeeds;

type Dict = BTreeMap<Vec<u8>, BValue>;

/// Dictionary entries this crate does not interpret, kept in the order they
/// were read so they can be written back untouched.
pub type Passthrough = Vec<(Vec<u8>, BValue)>;

/// Represents a .torrent file: the fields we understand plus everything else
/// carried along verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Torrent {
    pub announce: Option<Vec<u8>>,                // Primary tracker URL
    pub announce_list: Option<Vec<Vec<Vec<u8>>>>, // Tracker tiers
    pub comment: Option<Vec<u8>>,
    pub created_by: Option<Vec<u8>>,
    pub creation_date: Option<i64>, // Unix timestamp
    pub info: TorrentInfo,
    pub(crate) web_seeds: WebSeeds,
    extra: Passthrough,
}

/// Contents of the `info` dictionary.
///
/// Lengths are validated as non-negative when the torrent is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentInfo {
    pub name: Vec<u8>,
    pub piece_length: i64,
    pub pieces: Vec<u8>, // concatenated 20-byte SHA-1 hashes
    pub layout: FileLayout,
    extra: Passthrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileLayout {
    Single { length: i64 },
    Multi { files: Vec<FileEntry> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub length: i64,
    pub path: Vec<Vec<u8>>,
    extra: Passthrough,
}

impl Torrent {
    /// Projects a decoded document onto the torrent model.
    ///
    /// Returns an error if a recognized field is missing or has the wrong
    /// shape. Unrecognized entries never cause an error.
    pub fn from_bvalue(value: BValue) -> Result<Self, ProjectionError> {
        let root = match value {
            BValue::Dict(map) => map,
            other => {
                return Err(ProjectionError::NotADictionary {
                    found: other.kind(),
                })
            }
        };
        let mut fields = Fields::new(root, "");

        let announce = fields.optional("announce", expect_bytes)?;
        let announce_list = fields.optional("announce-list", announce_tiers)?;
        let comment = fields.optional("comment", expect_bytes)?;
        let created_by = fields.optional("created by", expect_bytes)?;
        let creation_date = fields.optional("creation date", expect_integer)?;
        let info = fields.required("info", TorrentInfo::from_bvalue)?;
        let web_seeds = WebSeeds::from_field(fields.take("url-list"))?;

        Ok(Torrent {
            announce,
            announce_list,
            comment,
            created_by,
            creation_date,
            info,
            web_seeds,
            extra: fields.into_passthrough(),
        })
    }

    /// Rebuilds the top-level dictionary. Unmodified fields come out exactly
    /// as they were read.
    pub fn to_bvalue(&self) -> BValue {
        let mut root: Dict = self.extra.iter().cloned().collect();

        if let Some(announce) = &self.announce {
            root.insert(b"announce".to_vec(), BValue::ByteString(announce.clone()));
        }
        if let Some(tiers) = &self.announce_list {
            let tiers = tiers.iter().map(|tier| byte_list(tier)).collect();
            root.insert(b"announce-list".to_vec(), BValue::List(tiers));
        }
        if let Some(comment) = &self.comment {
            root.insert(b"comment".to_vec(), BValue::ByteString(comment.clone()));
        }
        if let Some(created_by) = &self.created_by {
            root.insert(b"created by".to_vec(), BValue::ByteString(created_by.clone()));
        }
        if let Some(date) = self.creation_date {
            root.insert(b"creation date".to_vec(), BValue::Integer(date));
        }
        root.insert(b"info".to_vec(), self.info.to_bvalue());
        if let Some(url_list) = self.web_seeds.to_field() {
            root.insert(b"url-list".to_vec(), url_list);
        }

        BValue::Dict(root)
    }

    pub fn encode(&self) -> Vec<u8> {
        encode_bvalue(&self.to_bvalue())
    }

    /// Bencoded bytes of the `info` dictionary.
    pub fn info_bytes(&self) -> Vec<u8> {
        encode_bvalue(&self.info.to_bvalue())
    }

    pub fn info_hash(&self) -> [u8; 20] {
        calculate_info_hash(&self.info)
    }

    /// True once a webseed operation changed the url list.
    pub fn is_modified(&self) -> bool {
        self.web_seeds.is_modified()
    }
}

impl TorrentInfo {
    pub fn from_bvalue(value: BValue, field: &str) -> Result<Self, ProjectionError> {
        let mut fields = Fields::new(expect_dict(value, field)?, field);

        let name = fields.required("name", expect_bytes)?;
        let piece_length = fields.required("piece length", expect_length)?;
        let pieces = fields.required("pieces", expect_bytes)?;

        // Multi-file torrents carry `files`, single-file ones `length`.
        let layout = match fields.optional("files", file_entries)? {
            Some(files) => FileLayout::Multi { files },
            None => FileLayout::Single {
                length: fields.required("length", expect_length)?,
            },
        };

        Ok(TorrentInfo {
            name,
            piece_length,
            pieces,
            layout,
            extra: fields.into_passthrough(),
        })
    }

    pub fn to_bvalue(&self) -> BValue {
        let mut info: Dict = self.extra.iter().cloned().collect();

        info.insert(b"name".to_vec(), BValue::ByteString(self.name.clone()));
        info.insert(b"piece length".to_vec(), BValue::Integer(self.piece_length));
        info.insert(b"pieces".to_vec(), BValue::ByteString(self.pieces.clone()));
        match &self.layout {
            FileLayout::Single { length } => {
                info.insert(b"length".to_vec(), BValue::Integer(*length));
            }
            FileLayout::Multi { files } => {
                let files = files.iter().map(FileEntry::to_bvalue).collect();
                info.insert(b"files".to_vec(), BValue::List(files));
            }
        }

        BValue::Dict(info)
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Number of 20-byte piece hashes.
    pub fn piece_count(&self) -> usize {
        self.pieces.len() / 20
    }
}

impl FileEntry {
    fn from_bvalue(value: BValue, field: &str) -> Result<Self, ProjectionError> {
        let mut fields = Fields::new(expect_dict(value, field)?, field);
        let length = fields.required("length", expect_length)?;
        let path = fields.required("path", path_segments)?;

        Ok(FileEntry {
            length,
            path,
            extra: fields.into_passthrough(),
        })
    }

    fn to_bvalue(&self) -> BValue {
        let mut entry: Dict = self.extra.iter().cloned().collect();
        entry.insert(b"length".to_vec(), BValue::Integer(self.length));
        let path = self.path.iter().cloned().map(BValue::ByteString).collect();
        entry.insert(b"path".to_vec(), BValue::List(path));
        BValue::Dict(entry)
    }
}

/// A dictionary being picked apart. Whatever is not taken ends up as
/// passthrough.
struct Fields {
    dict: Dict,
    prefix: String,
}

impl Fields {
    fn new(dict: Dict, prefix: &str) -> Self {
        Fields {
            dict,
            prefix: prefix.to_string(),
        }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    fn take(&mut self, key: &str) -> Option<BValue> {
        self.dict.remove(key.as_bytes())
    }

    fn optional<T>(
        &mut self,
        key: &str,
        convert: impl FnOnce(BValue, &str) -> Result<T, ProjectionError>,
    ) -> Result<Option<T>, ProjectionError> {
        match self.take(key) {
            Some(value) => convert(value, &self.path(key)).map(Some),
            None => Ok(None),
        }
    }

    fn required<T>(
        &mut self,
        key: &str,
        convert: impl FnOnce(BValue, &str) -> Result<T, ProjectionError>,
    ) -> Result<T, ProjectionError> {
        let path = self.path(key);
        let value = self
            .take(key)
            .ok_or_else(|| ProjectionError::MissingField(path.clone()))?;
        convert(value, &path)
    }

    fn into_passthrough(self) -> Passthrough {
        self.dict.into_iter().collect()
    }
}

fn wrong_type(field: &str, expected: &'static str, found: &BValue) -> ProjectionError {
    ProjectionError::WrongType {
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}

pub(crate) fn expect_bytes(value: BValue, field: &str) -> Result<Vec<u8>, ProjectionError> {
    match value {
        BValue::ByteString(bytes) => Ok(bytes),
        other => Err(wrong_type(field, "a byte string", &other)),
    }
}

fn expect_integer(value: BValue, field: &str) -> Result<i64, ProjectionError> {
    match value {
        BValue::Integer(i) => Ok(i),
        other => Err(wrong_type(field, "an integer", &other)),
    }
}

fn expect_length(value: BValue, field: &str) -> Result<i64, ProjectionError> {
    let length = expect_integer(value, field)?;
    if length < 0 {
        return Err(ProjectionError::OutOfRange {
            field: field.to_string(),
            value: length,
        });
    }
    Ok(length)
}

fn expect_list(value: BValue, field: &str) -> Result<Vec<BValue>, ProjectionError> {
    match value {
        BValue::List(items) => Ok(items),
        other => Err(wrong_type(field, "a list", &other)),
    }
}

fn expect_dict(value: BValue, field: &str) -> Result<Dict, ProjectionError> {
    match value {
        BValue::Dict(map) => Ok(map),
        other => Err(wrong_type(field, "a dictionary", &other)),
    }
}

fn announce_tiers(value: BValue, field: &str) -> Result<Vec<Vec<Vec<u8>>>, ProjectionError> {
    expect_list(value, field)?
        .into_iter()
        .enumerate()
        .map(|(i, tier)| {
            let tier_field = format!("{}[{}]", field, i);
            expect_list(tier, &tier_field)?
                .into_iter()
                .enumerate()
                .map(|(j, url)| expect_bytes(url, &format!("{}[{}]", tier_field, j)))
                .collect()
        })
        .collect()
}

fn file_entries(value: BValue, field: &str) -> Result<Vec<FileEntry>, ProjectionError> {
    expect_list(value, field)?
        .into_iter()
        .enumerate()
        .map(|(i, entry)| FileEntry::from_bvalue(entry, &format!("{}[{}]", field, i)))
        .collect()
}

fn path_segments(value: BValue, field: &str) -> Result<Vec<Vec<u8>>, ProjectionError> {
    expect_list(value, field)?
        .into_iter()
        .enumerate()
        .map(|(i, segment)| expect_bytes(segment, &format!("{}[{}]", field, i)))
        .collect()
}

pub(crate) fn byte_list(items: &[Vec<u8>]) -> BValue {
    BValue::List(items.iter().cloned().map(BValue::ByteString).collect())
}
