//! Backend-agnostic front for the vectorized decoders. Picks the permute
//! kernel the running CPU supports and falls back to the scalar decoder
//! everywhere else, so callers never need to know which path ran. Both
//! paths return bit-identical results.

use crate::common::GroupVarintError;

#[allow(clippy::needless_return)]
pub fn decode_group(input: &[u8]) -> Result<([u32; 4], usize), GroupVarintError> {
    #[cfg(target_arch = "x86_64")]
    {
        return crate::x86_64::decode::decode_group(input);
    }

    #[cfg(target_arch = "aarch64")]
    {
        return crate::aarch64::decode::decode_group(input);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        return crate::scalar::decode::decode_group(input);
    }
}

#[allow(clippy::needless_return)]
pub fn decode(count: usize, input: &[u8]) -> Result<Vec<u32>, GroupVarintError> {
    #[cfg(target_arch = "x86_64")]
    {
        return crate::x86_64::decode::decode(count, input);
    }

    #[cfg(target_arch = "aarch64")]
    {
        return crate::aarch64::decode::decode(count, input);
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        return crate::scalar::decode::decode(count, input);
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::scalar;

    // The defining property of the vectorized path: for any input, output
    // and consumed length equal the scalar decoder's.
    #[test]
    fn fuzz_equivalence_with_scalar() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let group: [u32; 4] = [
                random_any_width(&mut rng),
                random_any_width(&mut rng),
                random_any_width(&mut rng),
                random_any_width(&mut rng),
            ];
            let mut bytes = Vec::new();
            scalar::encode::encode_group(&group, &mut bytes);
            let appended = bytes.len();

            let (scalar_group, scalar_used) = scalar::decode::decode_group(&bytes).unwrap();
            let (simd_group, simd_used) = super::decode_group(&bytes).unwrap();

            assert_eq!(scalar_group, group);
            assert_eq!(scalar_used, appended);
            assert_eq!(simd_group, scalar_group);
            assert_eq!(simd_used, scalar_used);
        }
    }

    #[test]
    fn fuzz_bulk_round_trip() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let count = rng.gen_range(1..64) * 4;
            let input: Vec<u32> = (0..count).map(|_| random_any_width(&mut rng)).collect();
            let bytes = scalar::encode::encode(&input).unwrap();
            assert_eq!(super::decode(count, &bytes).unwrap(), input);
            assert_eq!(scalar::decode::decode(count, &bytes).unwrap(), input);
        }
    }

    #[test]
    fn every_selector_agrees() {
        let mut bytes = vec![0u8; 1 + 16];
        for (i, b) in bytes.iter_mut().skip(1).enumerate() {
            *b = 0xa0 | i as u8;
        }
        for selector in 0..=255u8 {
            bytes[0] = selector;
            assert_eq!(
                super::decode_group(&bytes).unwrap(),
                scalar::decode::decode_group(&bytes).unwrap(),
                "selector {:#04x}",
                selector
            );
        }
    }

    fn random_any_width(rng: &mut impl Rng) -> u32 {
        match rng.gen_range(1..5) {
            1 => rng.gen::<u8>() as u32,
            2 => rng.gen::<u16>() as u32,
            3 => rng.gen_range(0u32..16777216),
            _ => rng.gen::<u32>(),
        }
    }
}
