//! Draw orchestration service.
//!
//! Binds the pipeline contract: canonicalize, derive, shuffle, slice
//! winners, in that fixed order.

use primitive_types::U256;
use serde::{Serialize, Serializer};
use tracing::{debug, info};

use crate::canonical::canonicalize;
use crate::commitment::{derive, list_commitment};
use crate::errors::DrawError;
use crate::shuffle::shuffle_with_seed;

/// Everything a verifier needs to check one draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DrawOutcome {
    /// The revealed signal, verbatim
    pub signal: String,
    /// Number of participant slots after canonicalization
    pub total_count: usize,
    /// Hex list commitment (published before the signal existed)
    pub list_commitment: String,
    /// Hex draw digest over roster and signal
    pub digest: String,
    /// The draw digest as a big-endian 256-bit integer
    #[serde(serialize_with = "serialize_seed_decimal")]
    pub seed: U256,
    /// Full ranking of every slot; index 0 is rank 1
    pub ranking: Vec<String>,
    /// First `n` of the ranking
    pub winners: Vec<String>,
}

/// Serialize the seed as a decimal string; 256-bit values overflow every
/// native JSON number type.
fn serialize_seed_decimal<S>(seed: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(seed)
}

/// Draw Service
///
/// Orchestrates the draw pipeline:
/// 1. Validate winner count and signal
/// 2. Canonicalize the roster
/// 3. Derive list commitment, draw digest and seed
/// 4. Shuffle deterministically
/// 5. Slice the top-N winners
#[derive(Clone, Debug, Default)]
pub struct DrawService;

impl DrawService {
    /// Create a new draw service.
    pub fn new() -> Self {
        Self
    }

    /// Run one draw over a raw roster and a revealed signal.
    ///
    /// `winner_count` must be at least 1 and is clamped to the roster size.
    /// The signal must contain at least one non-whitespace character; the
    /// commit-then-reveal guarantee is void without a real revealed value.
    pub fn run_draw(
        &self,
        names: Vec<String>,
        signal: &str,
        winner_count: usize,
    ) -> Result<DrawOutcome, DrawError> {
        if winner_count == 0 {
            return Err(DrawError::InvalidWinnerCount {
                requested: winner_count,
            });
        }
        if signal.trim().is_empty() {
            return Err(DrawError::EmptySignal);
        }

        let canonical = canonicalize(names)?;
        let total_count = canonical.len();
        debug!(total = total_count, "Canonicalized roster");

        let commitment = list_commitment(&canonical);
        let digest = derive(&canonical, signal);
        debug!(digest = %digest.to_hex(), "Derived draw digest");

        let ranking = shuffle_with_seed(&canonical, digest.as_bytes());
        let winners = ranking[..winner_count.min(total_count)].to_vec();

        info!(
            total = total_count,
            winners = winners.len(),
            digest = %digest.to_hex(),
            "Draw complete"
        );

        Ok(DrawOutcome {
            signal: signal.to_owned(),
            total_count,
            list_commitment: hex::encode(commitment),
            digest: digest.to_hex(),
            seed: digest.seed(),
            ranking,
            winners,
        })
    }
}
