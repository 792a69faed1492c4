//! # Deterministic shuffle
//!
//! Seeded Fisher-Yates permutation of the canonical roster. This module is
//! the protocol's frozen reference algorithm: an independent verifier in any
//! language must reproduce it bit-for-bit to arrive at the same ranking.
//!
//! ## Frozen algorithm
//!
//! - **Generator**: ChaCha20 (RFC 8439 block function) keyed with the 32
//!   draw-digest bytes, block counter and stream id both zero. The keystream
//!   is consumed as little-endian 32-bit words, two words per draw:
//!   `value = lo | (hi << 32)`.
//! - **Uniform sampling**: unbiased modulo-rejection. For a bound `b`, draws
//!   below `2^64 mod b` are discarded and redrawn; accepted draws reduce as
//!   `value % b`.
//! - **Permutation**: Fisher-Yates from the last index down. For `i` from
//!   `len - 1` to `1`, draw `j` uniform in `[0, i]` and swap `i` and `j`.
//!
//! Note that this intentionally does NOT delegate the in-range sampling to
//! the `rand` crate's `gen_range`, whose exact draw sequence is a library
//! internal; the rejection rule above is spelled out here so the reference
//! stays stable across `rand` releases and across languages.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::commitment::Hash;

/// Shuffle a list deterministically from a 32-byte seed (Fisher-Yates).
///
/// Returns a new `Vec`; the input slice is never mutated. The same seed
/// always reproduces the same permutation regardless of platform, and the
/// output is always a permutation of the input.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: &Hash) -> Vec<T> {
    let mut result = items.to_vec();
    let len = result.len();

    if len <= 1 {
        return result;
    }

    let mut rng = ChaCha20Rng::from_seed(*seed);

    for i in (1..len).rev() {
        let j = uniform_index(&mut rng, (i + 1) as u64) as usize;
        result.swap(i, j);
    }

    result
}

/// Draw a uniform integer in `[0, bound)`.
///
/// The bottom `2^64 mod bound` values of the raw 64-bit range would map
/// unevenly under a plain modulo; they are rejected and redrawn.
fn uniform_index(rng: &mut ChaCha20Rng, bound: u64) -> u64 {
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let value = rng.next_u64();
        if value >= threshold {
            return value % bound;
        }
    }
}
