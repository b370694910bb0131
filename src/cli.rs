use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use log::warn;

use crate::config::{Config, UsageError};

/// Add, remove or list webseed URLs (the `url-list` field) in a .torrent file.
#[derive(Debug, Parser)]
#[command(name = "rusbit-webseed", version)]
#[command(group(ArgGroup::new("mode").required(true).args(["add", "remove", "list"])))]
pub struct Cli {
    /// Add a webseed URL
    #[arg(short, long)]
    pub add: bool,

    /// Remove a webseed URL
    #[arg(short, long)]
    pub remove: bool,

    /// List all webseed URLs
    #[arg(short, long)]
    pub list: bool,

    /// The .torrent file to edit
    pub torrent_file: PathBuf,

    /// Webseed URL, required with --add and --remove
    pub webseed_url: Option<String>,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, UsageError> {
        if self.list && self.webseed_url.is_some() {
            warn!("ignoring webseed URL in list mode");
        }
        Config::from_flags(
            self.add,
            self.remove,
            self.list,
            self.torrent_file,
            self.webseed_url,
        )
    }
}
