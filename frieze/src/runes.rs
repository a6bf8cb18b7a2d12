// Copyright 2025 the Frieze Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rune offsets in mixed-encoding text.
//!
//! Frame text is a byte sequence of UTF-8 interleaved with raw control
//! bytes: any byte below `0x80` counts as a single rune on its own, so a
//! bare `0x02` embedded in otherwise valid UTF-8 is one rune, not a
//! decode error. All rune arithmetic in this crate goes through this
//! module; the scan below is a behavioral contract, byte-for-byte.

use core::ops::Range;

/// The byte length of the rune starting with `byte`.
///
/// Bytes below `0x80` (including raw control bytes) are single-rune
/// units; otherwise the length is taken from the UTF-8 leading byte.
/// Stray continuation bytes resynchronize as single units.
fn rune_len(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Converts a rune offset into the corresponding byte offset by scanning
/// forward from the start of `bytes`.
pub fn rune_index(bytes: &[u8], rune: usize) -> usize {
    let mut offset = 0;
    for _ in 0..rune {
        offset += rune_len(bytes[offset]);
    }
    offset
}

/// The number of runes in `bytes`.
pub fn rune_count(bytes: &[u8]) -> usize {
    let mut offset = 0;
    let mut count = 0;
    while offset < bytes.len() {
        offset += rune_len(bytes[offset]);
        count += 1;
    }
    count
}

/// Iterates the byte range of each rune in `bytes`, in order.
pub(crate) fn rune_ranges(bytes: &[u8]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut offset = 0;
    core::iter::from_fn(move || {
        if offset >= bytes.len() {
            return None;
        }
        let start = offset;
        offset += rune_len(bytes[offset]);
        Some(start..offset)
    })
}

#[cfg(test)]
mod tests {
    use super::{rune_count, rune_index, rune_ranges};

    #[test]
    fn rune_index_vectors() {
        let testvector: &[(&str, usize, usize)] = &[
            ("", 0, 0),
            ("a\x02b", 0, 0),
            ("a\x02b", 1, 1),
            ("a\x02b", 2, 2),
            ("a\x02日本b", 0, 0),
            ("a\x02日本b", 1, 1),
            ("a\x02日本b", 2, 2),
            ("a\x02日本b", 3, 5),
            ("a\x02日本b", 4, 8),
            ("Kröger", 3, 4),
        ];

        for &(s, arg, want) in testvector {
            assert_eq!(
                rune_index(s.as_bytes(), arg),
                want,
                "rune_index({s:?}, {arg})"
            );
        }
    }

    #[test]
    fn rune_count_mixed() {
        assert_eq!(rune_count(b""), 0);
        assert_eq!(rune_count(b"a\x02b"), 3);
        assert_eq!(rune_count("a\x02日本b".as_bytes()), 5);
        assert_eq!(rune_count("Kröger".as_bytes()), 6);
    }

    #[test]
    fn rune_ranges_cover_input() {
        let bytes = "a\x02日本b".as_bytes();
        let ranges: alloc::vec::Vec<_> = rune_ranges(bytes).collect();
        assert_eq!(ranges, [0..1, 1..2, 2..5, 5..8, 8..9]);
    }
}
