use thiserror::Error;

/// A decoded document that does not have the shape of a torrent file.
///
/// `field` is the dotted path of the offending entry, e.g. `info.files[2].path`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("root of a .torrent must be a dictionary, found {found}")]
    NotADictionary { found: &'static str },

    #[error("missing required field '{0}'")]
    MissingField(String),

    #[error("field '{field}' must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '{field}' is out of range: {value}")]
    OutOfRange { field: String, value: i64 },
}
