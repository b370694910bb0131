use thiserror::Error;

/// Reasons a byte stream is not canonical bencode.
///
/// Every variant carries the byte offset where decoding stopped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input at byte {pos}")]
    Truncated { pos: usize },

    #[error("unexpected byte {} at offset {pos}", describe_byte(.byte))]
    UnexpectedByte { pos: usize, byte: u8 },

    #[error("malformed integer at byte {pos}: {reason}")]
    MalformedInteger { pos: usize, reason: &'static str },

    #[error("malformed string length at byte {pos}")]
    MalformedLength { pos: usize },

    #[error("dictionary key at byte {pos} is not strictly greater than the previous key")]
    UnsortedKeys { pos: usize },

    #[error("nesting deeper than {limit} levels at byte {pos}")]
    TooDeep { pos: usize, limit: usize },

    #[error("trailing data after value at byte {pos}")]
    TrailingData { pos: usize },
}

fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", *byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}
