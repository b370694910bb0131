use std::collections::BTreeMap;

use super::error::DecodeError;
use crate::bencode::bvalue::BValue;

/// Maximum nesting of lists and dictionaries accepted from untrusted input.
pub const MAX_DEPTH: usize = 64;

/// Decodes a complete bencoded document. Bytes left over after the top-level
/// value are rejected.
pub fn decode(input: &[u8]) -> Result<BValue, DecodeError> {
    let (consumed, value) = decode_bencode(input)?;
    if consumed != input.len() {
        return Err(DecodeError::TrailingData { pos: consumed });
    }
    Ok(value)
}

/// Decodes the first bencoded value in `input`, returning how many bytes it
/// occupied along with the value.
pub fn decode_bencode(input: &[u8]) -> Result<(usize, BValue), DecodeError> {
    let mut decoder = Decoder { input, pos: 0 };
    let value = decoder.value(0)?;
    Ok((decoder.pos, value))
}

struct Decoder<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    fn peek(&self) -> Result<u8, DecodeError> {
        self.input
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::Truncated { pos: self.pos })
    }

    fn expect(&mut self, marker: u8) -> Result<(), DecodeError> {
        let byte = self.peek()?;
        if byte != marker {
            return Err(DecodeError::UnexpectedByte { pos: self.pos, byte });
        }
        self.pos += 1;
        Ok(())
    }

    fn take_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        while self.pos < self.input.len() && accept(self.input[self.pos]) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn value(&mut self, depth: usize) -> Result<BValue, DecodeError> {
        match self.peek()? {
            b'i' => self.integer(),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            b'0'..=b'9' => self.byte_string().map(BValue::ByteString),
            byte => Err(DecodeError::UnexpectedByte { pos: self.pos, byte }),
        }
    }

    /// `i<digits>e`
    fn integer(&mut self) -> Result<BValue, DecodeError> {
        let start = self.pos;
        self.pos += 1; // skip 'i'
        let digits = self.take_while(|b| b == b'-' || b.is_ascii_digit());
        self.expect(b'e')?;

        parse_integer(digits)
            .map(BValue::Integer)
            .map_err(|reason| DecodeError::MalformedInteger { pos: start, reason })
    }

    /// `<length>:<bytes>`
    fn byte_string(&mut self) -> Result<Vec<u8>, DecodeError> {
        let start = self.pos;
        let digits = self.take_while(|b| b.is_ascii_digit());

        // Leading zeros are not allowed, "0" on its own is.
        if digits.is_empty() || (digits.len() > 1 && digits[0] == b'0') {
            return Err(DecodeError::MalformedLength { pos: start });
        }
        let length = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or(DecodeError::MalformedLength { pos: start })?;

        self.expect(b':')?;

        let end = match self.pos.checked_add(length) {
            Some(end) if end <= self.input.len() => end,
            _ => return Err(DecodeError::Truncated { pos: self.input.len() }),
        };
        let data = self.input[self.pos..end].to_vec();
        self.pos = end;
        Ok(data)
    }

    /// `l<items>e`
    fn list(&mut self, depth: usize) -> Result<BValue, DecodeError> {
        self.enter(depth)?;
        self.pos += 1; // skip 'l'

        let mut items = Vec::new();
        while self.peek()? != b'e' {
            items.push(self.value(depth + 1)?);
        }

        // add 1 to account for 'e'
        self.pos += 1;
        Ok(BValue::List(items))
    }

    /// `d<key><value>...e`, keys strictly ascending.
    fn dict(&mut self, depth: usize) -> Result<BValue, DecodeError> {
        self.enter(depth)?;
        self.pos += 1; // skip 'd'

        let mut map: BTreeMap<Vec<u8>, BValue> = BTreeMap::new();
        loop {
            let key_pos = self.pos;
            let byte = self.peek()?;
            if byte == b'e' {
                break;
            }
            // Dictionary keys must be strings
            if !byte.is_ascii_digit() {
                return Err(DecodeError::UnexpectedByte { pos: key_pos, byte });
            }
            let key = self.byte_string()?;
            if map
                .last_key_value()
                .is_some_and(|(previous, _)| key <= *previous)
            {
                return Err(DecodeError::UnsortedKeys { pos: key_pos });
            }

            let value = self.value(depth + 1)?;
            map.insert(key, value);
        }

        // add 1 to account for 'e'
        self.pos += 1;
        Ok(BValue::Dict(map))
    }

    fn enter(&self, depth: usize) -> Result<(), DecodeError> {
        if depth >= MAX_DEPTH {
            return Err(DecodeError::TooDeep {
                pos: self.pos,
                limit: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

/// Validates the canonical integer form and converts it without wrapping.
fn parse_integer(digits: &[u8]) -> Result<i64, &'static str> {
    let (negative, magnitude) = match digits.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, digits),
    };

    if magnitude.is_empty() {
        return Err("missing digits");
    }
    if !magnitude.iter().all(u8::is_ascii_digit) {
        return Err("misplaced sign");
    }
    if magnitude.len() > 1 && magnitude[0] == b'0' {
        return Err("leading zeros are not allowed");
    }
    if negative && magnitude == b"0" {
        return Err("negative zero is not allowed");
    }

    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or("out of 64-bit range")
}
