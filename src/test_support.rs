//! Torrent fixtures shared by the unit tests.

use crate::bencode::decode_bencode;

/// Single-file torrent with an empty url list.
pub(crate) const SAMPLE_TORRENT: &[u8] = b"d\
8:announce31:http://tracker.example/announce\
4:infod6:lengthi1024e4:name8:file.bin12:piece lengthi16384e6:pieces20:aaaaaaaaaaaaaaaaaaaae\
8:url-listle\
e";

/// Multi-file torrent with optional fields and passthrough entries at every
/// level.
pub(crate) const RICH_TORRENT: &[u8] = b"d\
8:announce31:http://tracker.example/announce\
13:announce-listll31:http://tracker.example/announceel21:udp://backup.example/ee\
7:comment5:hello\
10:created by9:mktorrent\
13:creation datei1700000000e\
8:encoding5:UTF-8\
4:infod\
5:filesld6:lengthi3e6:md5sum3:abc4:pathl1:a5:b.bineed6:lengthi5e4:pathl3:c.deee\
4:name3:dir\
12:piece lengthi16384e\
6:pieces20:bbbbbbbbbbbbbbbbbbbb\
7:privatei1e\
e\
8:url-listl21:http://seed1.example/e\
8:x-customd3:fooi1ee\
e";

/// BEP 19 allows `url-list` to be a single string.
pub(crate) const SINGLE_URL_TORRENT: &[u8] = b"d\
4:infod6:lengthi1e4:name1:x12:piece lengthi1e6:pieces0:e\
8:url-list21:http://seed1.example/\
e";

/// The exact bytes of the `info` value inside `input`.
pub(crate) fn raw_info_span(input: &[u8]) -> &[u8] {
    let marker = b"4:infod";
    let start = input
        .windows(marker.len())
        .position(|w| w == marker)
        .expect("fixture has an info dictionary")
        + marker.len()
        - 1;
    let (len, _) = decode_bencode(&input[start..]).expect("info dictionary decodes");
    &input[start..start + len]
}
