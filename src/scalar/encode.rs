use crate::common::{exact_encoded_len, width_of, GroupVarintError, GROUP_LEN};

/// Append one encoded group to `out`: a selector byte followed by each
/// value's minimal little-endian bytes, in order, with no padding.
///
/// The selector packs `width - 1` per value into 2-bit fields, first value
/// in bits 7-6. Grows `out` by `1 + w0 + w1 + w2 + w3` bytes; cannot fail.
pub fn encode_group(group: &[u32; 4], out: &mut Vec<u8>) {
    let w0 = width_of(group[0]);
    let w1 = width_of(group[1]);
    let w2 = width_of(group[2]);
    let w3 = width_of(group[3]);

    let selector = ((w0 - 1) << 6 | (w1 - 1) << 4 | (w2 - 1) << 2 | (w3 - 1)) as u8;
    out.push(selector);
    out.extend_from_slice(&group[0].to_le_bytes()[..w0]);
    out.extend_from_slice(&group[1].to_le_bytes()[..w1]);
    out.extend_from_slice(&group[2].to_le_bytes()[..w2]);
    out.extend_from_slice(&group[3].to_le_bytes()[..w3]);
}

/// Encode a sequence of whole groups. The input length must be a multiple
/// of four; a trailing partial group is rejected rather than silently
/// zero-padded, so callers keep control over their padding policy.
///
/// The returned buffer holds exactly the encoded bytes. Callers feeding it
/// to the vectorized decoder in-place can reserve
/// [`crate::common::DECODE_SLACK`] extra capacity, but the safe decoders do
/// not require it.
pub fn encode(input: &[u32]) -> Result<Vec<u8>, GroupVarintError> {
    if input.len() % GROUP_LEN != 0 {
        return Err(GroupVarintError::PartialGroup(input.len()));
    }
    let mut out = Vec::with_capacity(exact_encoded_len(input));
    for group in input.chunks_exact(GROUP_LEN) {
        encode_group(&[group[0], group[1], group[2], group[3]], &mut out);
    }
    Ok(out)
}
