//! DJB2 string hashing used to pick a bucket for a key

use std::num::NonZeroUsize;

/// Initial accumulator value of the DJB2 hash
pub const DJB2_SEED: u64 = 5381;

/// Computes the raw DJB2 accumulator for `bytes`.
///
/// Each byte updates the accumulator as `acc * 33 + byte`, written as
/// `(acc << 5) + acc + byte`. Overflow wraps.
#[must_use]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |acc, &byte| {
        (acc << 5).wrapping_add(acc).wrapping_add(u64::from(byte))
    })
}

/// Maps `key` to a bucket index in `[0, bucket_count)`.
#[must_use]
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub fn bucket_index(key: &str, bucket_count: NonZeroUsize) -> usize {
    // usize is at most 64 bits on every supported target, and the remainder
    // is below `bucket_count`, so both casts are lossless.
    (djb2(key.as_bytes()) % bucket_count.get() as u64) as usize
}
