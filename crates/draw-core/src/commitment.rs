//! # Commitment and seed derivation
//!
//! Two SHA-256 digests make up the public protocol:
//!
//! - **List commitment**: hash of the canonical names joined with `\n`.
//!   The organizer publishes this before the signal exists; it pins the
//!   roster without revealing the future outcome.
//! - **Draw digest**: hash of `join(names, "\n") || 0x00 || signal`. Its hex
//!   form is displayed for verification; its raw bytes, read as a big-endian
//!   base-256 integer, are the seed that drives the shuffle.
//!
//! ## Frozen wire format
//!
//! The byte string fed to SHA-256 is part of the public protocol and must be
//! reproduced exactly by independent verifiers:
//!
//! ```text
//! name_1 \n name_2 \n ... \n name_k 0x00 signal
//! ```
//!
//! Names are joined with a single `\n` (they come from a line-delimited
//! roster, so none can contain one), and a single NUL byte separates the
//! roster from the signal so the last name and the signal can never trade
//! bytes.

use primitive_types::U256;
use sha2::{Digest, Sha256};

/// SHA-256 output (256-bit).
pub type Hash = [u8; 32];

/// Separator between the joined canonical names and the signal.
pub const SIGNAL_SEPARATOR: u8 = 0x00;

/// Draw digest wrapper exposing its hex, integer-seed and raw-byte forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedDigest {
    bytes: Hash,
}

impl SeedDigest {
    /// Raw digest bytes; these key the deterministic shuffle.
    pub fn as_bytes(&self) -> &Hash {
        &self.bytes
    }

    /// Lowercase hex encoding, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The digest bytes as a big-endian unsigned integer.
    ///
    /// No modular reduction: the full-width 256-bit value is the seed.
    pub fn seed(&self) -> U256 {
        U256::from_big_endian(&self.bytes)
    }
}

/// Hash the canonical roster alone; the value published at commit time.
pub fn list_commitment(canonical_names: &[String]) -> Hash {
    Sha256::digest(canonical_names.join("\n").as_bytes()).into()
}

/// Derive the draw digest and seed from the canonical roster and the
/// revealed signal.
///
/// Deterministic: identical inputs always produce the identical digest, and
/// any change to either input (including one extra duplicate name) changes
/// it with overwhelming probability. A zero-length signal is accepted here;
/// the orchestrator decides whether to allow it.
pub fn derive(canonical_names: &[String], signal: &str) -> SeedDigest {
    let mut preimage = canonical_names.join("\n").into_bytes();
    preimage.push(SIGNAL_SEPARATOR);
    preimage.extend_from_slice(signal.as_bytes());

    SeedDigest {
        bytes: Sha256::digest(&preimage).into(),
    }
}
