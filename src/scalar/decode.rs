use crate::common::{selector_widths, GroupVarintError, GROUP_LEN};

/// Decode one group starting at the head of `input`. Returns the four
/// values and the number of bytes consumed (`1 + sum of widths`).
///
/// The needed length is known after the selector byte, so a short slice
/// fails with [`GroupVarintError::Truncated`] before any value is read.
/// This is the reference decoder: every other decode path must reproduce
/// its results exactly.
pub fn decode_group(input: &[u8]) -> Result<([u32; 4], usize), GroupVarintError> {
    let selector = match input.first() {
        Some(s) => *s,
        None => {
            return Err(GroupVarintError::Truncated {
                needed: 1,
                available: 0,
            })
        }
    };
    let widths = selector_widths(selector);
    let needed = 1 + widths[0] + widths[1] + widths[2] + widths[3];
    if input.len() < needed {
        return Err(GroupVarintError::Truncated {
            needed,
            available: input.len(),
        });
    }
    // Bounds established above; the trusted path does the actual reads.
    Ok(unsafe { decode_group_trusted(input) })
}

/// Decode one group without bounds checks.
///
/// # Safety
///
/// `input` must hold a complete encoded group at its head, i.e. at least
/// `1 + sum of widths` bytes for the selector found at `input[0]`. Buffers
/// produced by [`crate::scalar::encode::encode_group`] satisfy this.
pub unsafe fn decode_group_trusted(input: &[u8]) -> ([u32; 4], usize) {
    let selector = *input.get_unchecked(0);
    let widths = selector_widths(selector);
    let mut out = [0u32; 4];
    let mut pos = 1;
    for lane in 0..GROUP_LEN {
        out[lane] = extract_le(input.as_ptr().add(pos), widths[lane]);
        pos += widths[lane];
    }
    (out, pos)
}

/// Zero-extend `width` little-endian bytes at `data` to a `u32`.
#[inline]
unsafe fn extract_le(data: *const u8, width: usize) -> u32 {
    let mut value: u32 = 0;
    std::ptr::copy_nonoverlapping(data, (&mut value) as *mut u32 as *mut u8, width);
    u32::from_le(value)
}

/// Decode `count` values (a multiple of four) from consecutive groups.
pub fn decode(count: usize, input: &[u8]) -> Result<Vec<u32>, GroupVarintError> {
    if count % GROUP_LEN != 0 {
        return Err(GroupVarintError::PartialGroup(count));
    }
    let mut result = Vec::with_capacity(count);
    let mut pos = 0;
    for _ in 0..count / GROUP_LEN {
        let (group, used) = decode_group(&input[pos..])?;
        result.extend_from_slice(&group);
        pos += used;
    }
    Ok(result)
}
