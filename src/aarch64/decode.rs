use multiversion::target;

use crate::common::{GroupVarintError, DECODE_SLACK, GROUP_LEN};
use crate::tables::DECODE_TABLE;

#[inline]
pub fn available() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

/// Decode one group with a single 16-byte load and `tbl`.
///
/// Falls back to the scalar decoder when NEON is missing or when the slice
/// is too short for the wide load.
pub fn decode_group(input: &[u8]) -> Result<([u32; 4], usize), GroupVarintError> {
    if !available() || input.len() < 1 + DECODE_SLACK {
        return crate::scalar::decode::decode_group(input);
    }
    let mut lanes = [0u32; 4];
    // Safety: NEON was detected and 16 payload bytes are in bounds.
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
        // Safety: NEON was detected and 16 payload bytes are in bounds.
        let used = unsafe {
            shuffle_group(input[pos], input.as_ptr().add(pos + 1), lanes.as_mut_ptr())
        };
        result.extend_from_slice(&lanes);
        pos += 1 + used;
        decoded += GROUP_LEN;
    }
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
/// Requires NEON, 16 readable bytes at `payload`, and 16 writable bytes at
/// `lanes`. Out-of-range mask bytes (`0xff`) make `tbl` write zero, the
/// same zero-fill `pshufb` gives on x86.
#[target("aarch64+neon")]
unsafe fn shuffle_group(selector: u8, payload: *const u8, lanes: *mut u32) -> usize {
    use std::arch::aarch64::{uint8x16_t, vld1q_u8, vqtbl1q_u8, vst1q_u8};

    let entry = &DECODE_TABLE[selector as usize];
    let encoded: uint8x16_t = vld1q_u8(payload);
    let mask = vld1q_u8(entry.shuffle.as_ptr());
    let decoded = vqtbl1q_u8(encoded, mask);
    vst1q_u8(lanes as *mut u8, decoded);
    entry.encoded_len as usize
}
