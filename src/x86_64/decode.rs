use std::arch::x86_64::{__m128i, _mm_loadu_si128, _mm_shuffle_epi8, _mm_storeu_si128};

use multiversion::target;

use crate::common::{GroupVarintError, DECODE_SLACK, GROUP_LEN};
use crate::tables::DECODE_TABLE;

/// Whether the SSSE3 decode kernel can run on this CPU. The detection
/// macro caches its probe, so this is cheap to call per decode.
#[inline]
pub fn available() -> bool {
    std::arch::is_x86_feature_detected!("ssse3")
}

/// Decode one group with a single 16-byte load and `pshufb`.
///
/// Falls back to the scalar decoder when SSSE3 is missing or when the
/// slice is too short for the wide load. With at least `1 + DECODE_SLACK`
/// bytes present no group can be truncated, so the wide path never fails.
pub fn decode_group(input: &[u8]) -> Result<([u32; 4], usize), GroupVarintError> {
    if !available() || input.len() < 1 + DECODE_SLACK {
        return crate::scalar::decode::decode_group(input);
    }
    let mut lanes = [0u32; 4];
    // Safety: SSSE3 was detected and 16 payload bytes are in bounds.
    let used = unsafe { shuffle_group(input[0], input.as_ptr().add(1), lanes.as_mut_ptr()) };
    Ok((lanes, 1 + used))
}

/// Decode `count` values (a multiple of four) from consecutive groups,
/// shuffling while enough slack remains and finishing with the scalar
/// decoder.
pub fn decode(count: usize, input: &[u8]) -> Result<Vec<u32>, GroupVarintError> {
    if count % GROUP_LEN != 0 {
        return Err(GroupVarintError::PartialGroup(count));
    }
    if !available() {
        return crate::scalar::decode::decode(count, input);
    }

    let mut result: Vec<u32> = Vec::with_capacity(count);
    let mut pos = 0;
    let mut decoded = 0;
    while decoded < count && input.len() - pos >= 1 + DECODE_SLACK {
        let mut lanes = [0u32; 4];
        // Safety: SSSE3 was detected and 16 payload bytes are in bounds.
        let used = unsafe {
            shuffle_group(input[pos], input.as_ptr().add(pos + 1), lanes.as_mut_ptr())
        };
        result.extend_from_slice(&lanes);
        pos += 1 + used;
        decoded += GROUP_LEN;
    }
    // Groups near the end of the buffer have no slack behind them.
    while decoded < count {
        let (group, used) = crate::scalar::decode::decode_group(&input[pos..])?;
        result.extend_from_slice(&group);
        pos += used;
        decoded += GROUP_LEN;
    }
    Ok(result)
}

/// # Safety
///
/// Requires SSSE3, 16 readable bytes at `payload`, and 16 writable bytes
/// at `lanes`.
#[target("x86_64+ssse3")]
unsafe fn shuffle_group(selector: u8, payload: *const u8, lanes: *mut u32) -> usize {
    let entry = &DECODE_TABLE[selector as usize];
    let encoded: __m128i = _mm_loadu_si128(payload as *const __m128i);
    let mask = _mm_loadu_si128(entry.shuffle.as_ptr() as *const __m128i);
    let decoded = _mm_shuffle_epi8(encoded, mask);
    _mm_storeu_si128(lanes as *mut __m128i, decoded);
    entry.encoded_len as usize
}
