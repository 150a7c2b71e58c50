//! Code-point offsets on the script side, byte offsets on the host side.

use std::ops::Range;

use super::encoding::{Encoding, decode};

/// Clamp a caller offset into `[0, length]`
pub fn clamp_offset(length: usize, offset: i64) -> usize {
    if offset <= 0 {
        0
    } else {
        usize::try_from(offset).map_or(length, |o| o.min(length))
    }
}

/// Normalize a caller range so that `0 <= start <= end <= length`.
///
/// Never fails: out-of-range values are clamped and an inverted range
/// collapses onto its start.
pub fn clamp_range(length: usize, start: i64, end: i64) -> (usize, usize) {
    let start = clamp_offset(length, start);
    let end = clamp_offset(length, end).max(start);
    (start, end)
}

/// Byte offset in the host buffer for a code-point offset into `full_text`.
pub fn to_host_offset(full_text: &str, offset: i64, encoding: Encoding) -> usize {
    let length = full_text.chars().count();
    let offset = clamp_offset(length, offset);

    let prefix_end = full_text
        .char_indices()
        .nth(offset)
        .map_or(full_text.len(), |(i, _)| i);

    encoding.host_len(&full_text[..prefix_end])
}

/// Clamped caller range translated to a host byte range
pub fn to_host_range(full_text: &str, start: i64, end: i64, encoding: Encoding) -> Range<usize> {
    let (start, end) = clamp_range(full_text.chars().count(), start, end);
    to_host_offset(full_text, start as i64, encoding)..to_host_offset(full_text, end as i64, encoding)
}

/// Code-point offset for a byte offset into the host-encoded `host_text`.
///
/// An offset that splits a multi-byte sequence counts the partial
/// sequence as one replacement character.
pub fn from_host_offset(host_text: &[u8], offset: usize, encoding: Encoding) -> usize {
    let offset = offset.min(host_text.len());
    match encoding {
        // Single-byte page: one byte per code point
        Encoding::Legacy => offset,
        Encoding::Utf8 => decode(&host_text[..offset], encoding).chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::encode;

    #[test]
    fn clamp_range_identity_on_valid_ranges() {
        for a in 0..=10 {
            for b in a..=10 {
                assert_eq!(clamp_range(10, a, b), (a as usize, b as usize));
            }
        }
    }

    #[test]
    fn clamp_range_collapses_inverted() {
        assert_eq!(clamp_range(10, 7, 3), (7, 7));
        for start in 0..=10 {
            for end in 0..start {
                assert_eq!(clamp_range(10, start, end), (start as usize, start as usize));
            }
        }
    }

    #[test]
    fn clamp_range_out_of_bounds() {
        assert_eq!(clamp_range(10, -5, 20), (0, 10));
        assert_eq!(clamp_range(10, 20, -5), (10, 10));
        assert_eq!(clamp_range(10, i64::MIN, i64::MAX), (0, 10));
        assert_eq!(clamp_range(0, 3, 4), (0, 0));
    }

    #[test]
    fn to_host_offset_example() {
        // "hé" is 2 bytes in Windows-1252 and 3 bytes in UTF-8
        assert_eq!(to_host_offset("héllo", 2, Encoding::Legacy), 2);
        assert_eq!(to_host_offset("héllo", 2, Encoding::Utf8), 3);
    }

    #[test]
    fn to_host_offset_clamps() {
        assert_eq!(to_host_offset("héllo", -1, Encoding::Utf8), 0);
        assert_eq!(to_host_offset("héllo", 99, Encoding::Utf8), 6);
        assert_eq!(to_host_offset("héllo", 99, Encoding::Legacy), 5);
        assert_eq!(to_host_offset("", 3, Encoding::Utf8), 0);
    }

    #[test]
    fn to_host_offset_is_monotonic() {
        let text = "a😀é€b\r\n日本";
        for encoding in [Encoding::Utf8, Encoding::Legacy] {
            let offsets: Vec<usize> = (-2..14)
                .map(|k| to_host_offset(text, k, encoding))
                .collect();
            assert!(offsets.windows(2).all(|w| w[0] <= w[1]), "{encoding:?}");
        }
    }

    #[test]
    fn round_trip_utf8() {
        let text = "a😀é€b\r\n日本";
        let host = encode(text, Encoding::Utf8);
        for k in 0..=text.chars().count() {
            let byte = to_host_offset(text, k as i64, Encoding::Utf8);
            assert_eq!(from_host_offset(&host, byte, Encoding::Utf8), k);
        }
    }

    #[test]
    fn round_trip_legacy() {
        let text = "héllo €uro";
        let host = encode(text, Encoding::Legacy);
        for k in 0..=text.chars().count() {
            let byte = to_host_offset(text, k as i64, Encoding::Legacy);
            assert_eq!(from_host_offset(&host, byte, Encoding::Legacy), k);
        }
    }

    #[test]
    fn from_host_offset_clamps_past_end() {
        assert_eq!(from_host_offset("héllo".as_bytes(), 100, Encoding::Utf8), 5);
        assert_eq!(from_host_offset(b"h\xe9llo", 100, Encoding::Legacy), 5);
    }

    #[test]
    fn from_host_offset_inside_sequence() {
        // Byte 2 splits the two-byte 'é'
        assert_eq!(from_host_offset("héllo".as_bytes(), 2, Encoding::Utf8), 2);
    }

    #[test]
    fn host_range() {
        assert_eq!(to_host_range("héllo", 1, 3, Encoding::Utf8), 1..4);
        assert_eq!(to_host_range("héllo", 3, 1, Encoding::Utf8), 4..4);
        assert_eq!(to_host_range("héllo", -4, 40, Encoding::Legacy), 0..5);
    }
}
