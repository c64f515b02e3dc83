use thiserror::Error;

/// Number of values in a group.
pub const GROUP_LEN: usize = 4;

/// Smallest encoded group: selector byte plus four 1-byte values.
pub const MIN_GROUP_ENCODED_LEN: usize = 5;

/// Largest encoded group: selector byte plus four 4-byte values.
pub const MAX_GROUP_ENCODED_LEN: usize = 17;

/// Bytes the vectorized decoder may read past the selector byte in a single
/// wide load, regardless of how many of them the group actually uses.
pub const DECODE_SLACK: usize = 16;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GroupVarintError {
    /// A decode found fewer bytes than the selector byte announced.
    #[error("truncated group: need {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    /// A bulk operation was given a value count that does not divide into
    /// whole groups of four. Callers decide their own padding policy.
    #[error("value count {0} is not a multiple of four")]
    PartialGroup(usize),
}

/// Minimal number of bytes (1..=4) needed to represent `value`. Zero still
/// takes one byte.
#[inline]
pub fn width_of(value: u32) -> usize {
    let t1 = (value > 0x0000_00ff) as usize;
    let t2 = (value > 0x0000_ffff) as usize;
    let t3 = (value > 0x00ff_ffff) as usize;
    1 + t1 + t2 + t3
}

/// The four byte widths packed into a selector byte, first member in bits
/// 7-6. `const` so the shuffle table builder and the scalar decoder share
/// one definition.
#[inline]
pub const fn selector_widths(selector: u8) -> [usize; 4] {
    [
        ((selector >> 6) & 0x3) as usize + 1,
        ((selector >> 4) & 0x3) as usize + 1,
        ((selector >> 2) & 0x3) as usize + 1,
        (selector & 0x3) as usize + 1,
    ]
}

/// Maximum encoded length for `values` integers, including the slack the
/// vectorized decoder needs behind the last group. A trailing partial
/// group is sized as a whole one.
pub fn max_encoded_len(values: usize) -> usize {
    let groups = (values + GROUP_LEN - 1) / GROUP_LEN;
    groups * MAX_GROUP_ENCODED_LEN + (DECODE_SLACK - GROUP_LEN)
}

/// Exact encoded length in bytes. `O(n)` because it needs to read the full
/// input.
pub fn exact_encoded_len(values: &[u32]) -> usize {
    let selectors = (values.len() + GROUP_LEN - 1) / GROUP_LEN;
    selectors + values.iter().map(|v| width_of(*v)).sum::<usize>()
}
