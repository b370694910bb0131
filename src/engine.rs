// src/engine.rs
use std::io::{self, Write};

use log::{debug, info};

use crate::bencode::decode;
use crate::config::{Config, Mode};
use crate::error::EditError;
use crate::file_io::{read_torrent_file, write_atomically};
use crate::torrent::{
    add_webseed, list_webseeds, remove_webseed, AddResult, RemoveResult, Torrent,
};

/// Result of a successful invocation. `AlreadyPresent` and `NotFound` are
/// not failures, the file simply needed no change.
///
/// Listed URLs are decoded for display only; bytes that are not UTF-8 show up
/// as replacement characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    AlreadyPresent,
    Removed,
    NotFound,
    Listed(Vec<String>),
}

impl From<AddResult> for Outcome {
    fn from(result: AddResult) -> Self {
        match result {
            AddResult::Added => Outcome::Added,
            AddResult::AlreadyPresent => Outcome::AlreadyPresent,
        }
    }
}

impl From<RemoveResult> for Outcome {
    fn from(result: RemoveResult) -> Self {
        match result {
            RemoveResult::Removed => Outcome::Removed,
            RemoveResult::NotFound => Outcome::NotFound,
        }
    }
}

/// Reads the torrent named in `config`, applies its mode and, if the url list
/// changed, writes the result back.
///
/// The file is read completely before anything is modified and only replaced
/// once the new contents are fully encoded.
pub fn run(config: &Config) -> Result<Outcome, EditError> {
    let path = config.torrent_path.as_path();

    let bytes = read_torrent_file(path)?;
    debug!("read {} bytes from {}", bytes.len(), path.display());

    let mut torrent = Torrent::from_bvalue(decode(&bytes)?)?;
    let info_hash = torrent.info_hash();
    info!(
        "{}: '{}', {} pieces, info hash {}",
        path.display(),
        torrent.info.name_lossy(),
        torrent.info.piece_count(),
        hex::encode(info_hash)
    );

    let outcome = match &config.mode {
        Mode::List => {
            let urls = list_webseeds(&torrent)
                .iter()
                .map(|url| String::from_utf8_lossy(url).into_owned())
                .collect();
            return Ok(Outcome::Listed(urls));
        }
        Mode::Add(url) => Outcome::from(add_webseed(&mut torrent, url)),
        Mode::Remove(url) => Outcome::from(remove_webseed(&mut torrent, url)),
    };
    debug!("{}: {:?}", config.mode.name(), outcome);

    if !torrent.is_modified() {
        info!("url-list unchanged, leaving {} as is", path.display());
        return Ok(outcome);
    }

    let new_hash = torrent.info_hash();
    if new_hash != info_hash {
        return Err(EditError::InfoHashChanged {
            before: hex::encode(info_hash),
            after: hex::encode(new_hash),
        });
    }

    let encoded = torrent.encode();
    write_atomically(path, &encoded)?;
    info!("wrote {} bytes to {}", encoded.len(), path.display());

    Ok(outcome)
}

/// Writes the user-facing message for `outcome`.
pub fn report<W: Write>(outcome: &Outcome, out: &mut W) -> io::Result<()> {
    match outcome {
        Outcome::Added => writeln!(out, "Webseed URL added successfully."),
        Outcome::AlreadyPresent => writeln!(out, "Webseed URL already exists in the torrent file."),
        Outcome::Removed => writeln!(out, "Webseed URL removed successfully."),
        Outcome::NotFound => writeln!(out, "Webseed URL not found in the torrent file."),
        Outcome::Listed(urls) if urls.is_empty() => {
            writeln!(out, "No webseeds found in the torrent file.")
        }
        Outcome::Listed(urls) => {
            writeln!(out, "Webseeds in the torrent file:")?;
            for url in urls {
                writeln!(out, "{}", url)?;
            }
            Ok(())
        }
    }
}
