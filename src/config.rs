use std::path::PathBuf;

use thiserror::Error;

/// What a single invocation should do to the torrent file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Add(String),
    Remove(String),
    List,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Add(_) => "add",
            Mode::Remove(_) => "remove",
            Mode::List => "list",
        }
    }
}

/// Everything the engine needs, built once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub torrent_path: PathBuf,
    pub mode: Mode,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("exactly one of --add, --remove or --list must be given")]
    ModeCount,

    #[error("a webseed URL is required to {0}")]
    MissingUrl(&'static str),
}

impl Config {
    /// Builds a config from the individual mode switches.
    ///
    /// `webseed_url` is required for add and remove and ignored for list.
    ///
    /// This is also the entry point for library callers that do not go through
    /// `Cli`, so it checks the mode count itself. On the command line clap's
    /// `mode` group rejects those combinations first and `ModeCount` is never
    /// reached.
    pub fn from_flags(
        add: bool,
        remove: bool,
        list: bool,
        torrent_path: PathBuf,
        webseed_url: Option<String>,
    ) -> Result<Self, UsageError> {
        let url = webseed_url.filter(|url| !url.is_empty());
        let mode = match (add, remove, list) {
            (true, false, false) => Mode::Add(url.ok_or(UsageError::MissingUrl("add"))?),
            (false, true, false) => Mode::Remove(url.ok_or(UsageError::MissingUrl("remove"))?),
            (false, false, true) => Mode::List,
            _ => return Err(UsageError::ModeCount),
        };
        Ok(Config { torrent_path, mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("file.torrent")
    }

    #[test]
    fn test_modes() {
        let url = || Some("http://seed1.example/".to_string());
        assert_eq!(
            Config::from_flags(true, false, false, path(), url()).unwrap().mode,
            Mode::Add("http://seed1.example/".to_string())
        );
        assert_eq!(
            Config::from_flags(false, true, false, path(), url()).unwrap().mode,
            Mode::Remove("http://seed1.example/".to_string())
        );
        assert_eq!(
            Config::from_flags(false, false, true, path(), None).unwrap().mode,
            Mode::List
        );
    }

    #[test]
    fn test_list_ignores_url() {
        let config = Config::from_flags(false, false, true, path(), Some("x".into())).unwrap();
        assert_eq!(config.mode, Mode::List);
    }

    #[test]
    fn test_mode_count() {
        assert_eq!(
            Config::from_flags(false, false, false, path(), None),
            Err(UsageError::ModeCount)
        );
        assert_eq!(
            Config::from_flags(true, true, false, path(), Some("x".into())),
            Err(UsageError::ModeCount)
        );
        assert_eq!(
            Config::from_flags(true, true, true, path(), Some("x".into())),
            Err(UsageError::ModeCount)
        );
    }

    #[test]
    fn test_missing_url() {
        assert_eq!(
            Config::from_flags(true, false, false, path(), None),
            Err(UsageError::MissingUrl("add"))
        );
        assert_eq!(
            Config::from_flags(false, true, false, path(), Some(String::new())),
            Err(UsageError::MissingUrl("remove"))
        );
    }
}
