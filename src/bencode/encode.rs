use super::BValue;

/// Encode a `BValue` back into a bencoded `Vec<u8>`.
///
/// Encoding cannot fail: dictionary keys come out of the `BTreeMap` already in
/// ascending byte order and integers are printed in their minimal form.
pub fn encode_bvalue(value: &BValue) -> Vec<u8> {
	let mut out: Vec<u8> = Vec::new();
	encode_into(value, &mut out);
	out
}

fn encode_into(value: &BValue, out: &mut Vec<u8>) {
	match value {
		BValue::Integer(i) => {
			out.push(b'i');
			out.extend_from_slice(i.to_string().as_bytes());
			out.push(b'e');
		}
		BValue::ByteString(bytes) => encode_bytes(bytes, out),
		BValue::List(items) => {
			out.push(b'l');
			for item in items {
				encode_into(item, out);
			}
			out.push(b'e');
		}
		BValue::Dict(dict) => {
			out.push(b'd');
			for (key, val) in dict {
				encode_bytes(key, out);
				encode_into(val, out);
			}
			out.push(b'e');
		}
	}
}

fn encode_bytes(bytes: &[u8], out: &mut Vec<u8>) {
	out.extend_from_slice(bytes.len().to_string().as_bytes());
	out.push(b':');
	out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;
	use crate::bencode::decode;

	#[test]
	fn test_encode_integer() {
		assert_eq!(encode_bvalue(&BValue::Integer(42)), b"i42e");
		assert_eq!(encode_bvalue(&BValue::Integer(-42)), b"i-42e");
		assert_eq!(encode_bvalue(&BValue::Integer(0)), b"i0e");
		assert_eq!(
			encode_bvalue(&BValue::Integer(i64::MAX)),
			b"i9223372036854775807e"
		);
	}

	#[test]
	fn test_encode_binary_string_uses_byte_length() {
		// "é" is two bytes in UTF-8
		assert_eq!(encode_bvalue(&BValue::string("é")), "2:é".as_bytes());
		assert_eq!(
			encode_bvalue(&BValue::ByteString(vec![0xff, 0x00])),
			b"2:\xff\x00"
		);
	}

	#[test]
	fn test_encode_list() {
		let list = BValue::List(vec![BValue::string("spam"), BValue::Integer(42)]);
		assert_eq!(encode_bvalue(&list), b"l4:spami42ee");
		assert_eq!(encode_bvalue(&BValue::List(Vec::new())), b"le");
	}

	#[test]
	fn test_encode_dict_sorts_keys() {
		let mut dict = BTreeMap::new();
		dict.insert(b"zeta".to_vec(), BValue::Integer(1));
		dict.insert(b"alpha".to_vec(), BValue::Integer(2));
		dict.insert(b"Zulu".to_vec(), BValue::Integer(3));
		dict.insert(b"piece length".to_vec(), BValue::Integer(4));
		dict.insert(b"pieces".to_vec(), BValue::Integer(5));

		assert_eq!(
			encode_bvalue(&BValue::Dict(dict)),
			b"d4:Zului3e5:alphai2e12:piece lengthi4e6:piecesi5e4:zetai1ee".to_vec()
		);
	}

	#[test]
	fn test_encode_nested_dict_sorts_keys() {
		let mut inner = BTreeMap::new();
		inner.insert(b"b".to_vec(), BValue::Integer(2));
		inner.insert(b"a".to_vec(), BValue::Integer(1));
		let mut outer = BTreeMap::new();
		outer.insert(b"y".to_vec(), BValue::List(vec![BValue::Dict(inner)]));
		outer.insert(b"x".to_vec(), BValue::string(""));

		assert_eq!(
			encode_bvalue(&BValue::Dict(outer)),
			b"d1:x0:1:yld1:ai1e1:bi2eeee".to_vec()
		);
	}

	#[test]
	fn test_round_trip_is_byte_identical() {
		let input: &[u8] = b"d8:announce3:foo7:comment0:\
			4:infod6:lengthi4294967296e4:name3:\xff\xfe\x00\
			12:piece lengthi262144e6:pieces4:\x01\x02\x03\x04e\
			3:xyzld1:ai-1eeee";
		let value = decode(input).unwrap();
		assert_eq!(encode_bvalue(&value), input);
	}
}
