//! Group varint codec for `u32` values.
//!
//! Packs groups of exactly four unsigned 32-bit integers into a
//! self-describing byte sequence: one selector byte whose 2-bit fields
//! record each value's byte width (first value in bits 7-6), followed by
//! each value's minimal little-endian bytes. An encoded group is 5 to 17
//! bytes. This is the block-format building block used by columnar stores
//! for row keys, offsets and bulk column values.
//!
//! Two decode paths are provided: a portable scalar decoder
//! ([`scalar::decode`]) and a vectorized one ([`simd`]) that expands a
//! whole group with a single table-driven byte permute. They are
//! bit-for-bit equivalent; [`simd`] picks whichever the CPU supports.
//!
//! ```
//! let mut buf = Vec::new();
//! groupvb::encode_group(&[256, 2, 3, 65535], &mut buf);
//! assert_eq!(buf, [0x41, 0x00, 0x01, 0x02, 0x03, 0xff, 0xff]);
//!
//! let (group, used) = groupvb::decode_group(&buf).unwrap();
//! assert_eq!(group, [256, 2, 3, 65535]);
//! assert_eq!(used, buf.len());
//! ```

pub mod common;
pub mod scalar;
pub mod simd;
pub mod tables;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

pub use common::{
    exact_encoded_len, max_encoded_len, width_of, GroupVarintError, DECODE_SLACK, GROUP_LEN,
    MAX_GROUP_ENCODED_LEN, MIN_GROUP_ENCODED_LEN,
};
pub use scalar::encode::{encode, encode_group};
pub use simd::{decode, decode_group};
