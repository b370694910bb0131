// infohash.rs
use crate::bencode::encode_bvalue;
use crate::torrent::TorrentInfo;

use sha1::{Digest, Sha1};

/// SHA-1 of the bencoded `info` dictionary, the identifier peers and trackers
/// know the torrent by.
pub fn calculate_info_hash(info: &TorrentInfo) -> [u8; 20] {
    let encoded = encode_bvalue(&info.to_bvalue());

    let mut hasher = Sha1::new();
    hasher.update(&encoded);
    let result = hasher.finalize();

    let mut hash_bytes = [0u8; 20];
    hash_bytes.copy_from_slice(&result);
    hash_bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::decode;
    use crate::test_support::{raw_info_span, RICH_TORRENT, SAMPLE_TORRENT};
    use crate::torrent::Torrent;

    #[test]
    fn test_info_hash_matches_raw_info_bytes() {
        for input in [SAMPLE_TORRENT, RICH_TORRENT] {
            let torrent = Torrent::from_bvalue(decode(input).unwrap()).unwrap();
            let expected = Sha1::digest(raw_info_span(input));

            assert_eq!(torrent.info_bytes(), raw_info_span(input));
            assert_eq!(calculate_info_hash(&torrent.info).as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn test_info_hash_differs_per_torrent() {
        let a = Torrent::from_bvalue(decode(SAMPLE_TORRENT).unwrap()).unwrap();
        let b = Torrent::from_bvalue(decode(RICH_TORRENT).unwrap()).unwrap();
        assert_ne!(a.info_hash(), b.info_hash());
    }
}
