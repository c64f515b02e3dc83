//! Decode table for the vectorized path, one entry per selector byte.
//!
//! Each entry is a byte-permutation mask in the `pshufb`/`tbl` convention:
//! output byte `i` of the 16-byte register is taken from payload byte
//! `shuffle[i]`, or zero-filled when `shuffle[i]` is `0xff` (high bit set).
//! Output lane `n` occupies bytes `4n..4n+4`, so applying the mask to the
//! raw payload expands all four values to little-endian `u32` lanes in a
//! single permute. `encoded_len` is the payload length for that selector.
//!
//! The table is built by const evaluation, so there is no first-use
//! initialization to guard: it exists before `main` and is only ever read.

use crate::common::selector_widths;

/// Zero-fill marker. Any mask byte with the high bit set makes the permute
/// write a zero byte.
const ZERO_FILL: u8 = 0xff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleEntry {
    /// Permutation mask mapping payload bytes to output lane bytes.
    pub shuffle: [u8; 16],
    /// Total payload length for this selector (sum of the four widths).
    pub encoded_len: u8,
}

pub static DECODE_TABLE: [ShuffleEntry; 256] = build_table();

/// Full table contents, for inspection and diagnostics. Not used on the
/// decode path, which indexes [`DECODE_TABLE`] directly.
pub fn decode_table() -> &'static [ShuffleEntry; 256] {
    &DECODE_TABLE
}

const fn build_entry(selector: u8) -> ShuffleEntry {
    let widths = selector_widths(selector);
    let mut shuffle = [ZERO_FILL; 16];
    let mut src = 0u8;
    let mut lane = 0;
    while lane < 4 {
        let mut byte = 0;
        while byte < widths[lane] {
            shuffle[lane * 4 + byte] = src;
            src += 1;
            byte += 1;
        }
        lane += 1;
    }
    ShuffleEntry {
        shuffle,
        encoded_len: src,
    }
}

const fn build_table() -> [ShuffleEntry; 256] {
    let mut table = [ShuffleEntry {
        shuffle: [ZERO_FILL; 16],
        encoded_len: 0,
    }; 256];
    let mut selector = 0;
    while selector < 256 {
        table[selector] = build_entry(selector as u8);
        selector += 1;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rebuild every entry from the selector widths alone and compare. Also
    // pins down determinism: two independent constructions agree bit for
    // bit.
    #[test]
    fn matches_recomputation() {
        for selector in 0..=255u8 {
            let widths = selector_widths(selector);
            let entry = &decode_table()[selector as usize];

            assert_eq!(
                entry.encoded_len as usize,
                widths.iter().sum::<usize>(),
                "selector {:#010b}",
                selector
            );
            assert_eq!(*entry, build_entry(selector));

            let mut src = 0u8;
            for (lane, &width) in widths.iter().enumerate() {
                for byte in 0..4 {
                    let expect = if byte < width {
                        let s = src;
                        src += 1;
                        s
                    } else {
                        ZERO_FILL
                    };
                    assert_eq!(entry.shuffle[lane * 4 + byte], expect);
                }
            }
        }
    }

    #[test]
    fn literal_entries() {
        // All-ones widths: payload bytes 0..4 land at the start of each lane.
        let entry = &DECODE_TABLE[0];
        assert_eq!(entry.encoded_len, 4);
        assert_eq!(
            entry.shuffle,
            [0, 0xff, 0xff, 0xff, 1, 0xff, 0xff, 0xff, 2, 0xff, 0xff, 0xff, 3, 0xff, 0xff, 0xff]
        );

        // Selector 0b01_00_00_01: widths 2,1,1,2.
        let entry = &DECODE_TABLE[0x41];
        assert_eq!(entry.encoded_len, 6);
        assert_eq!(
            entry.shuffle,
            [0, 1, 0xff, 0xff, 2, 0xff, 0xff, 0xff, 3, 0xff, 0xff, 0xff, 4, 5, 0xff, 0xff]
        );

        // All four bytes wide: the identity permutation.
        let entry = &DECODE_TABLE[0xff];
        assert_eq!(entry.encoded_len, 16);
        assert_eq!(
            entry.shuffle,
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
    }
}
