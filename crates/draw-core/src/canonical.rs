//! Canonical form of the participant roster.
//!
//! The canonical list is the single authoritative ordering prior to
//! shuffling: trimmed, blank-free, sorted byte-wise ascending, duplicates
//! kept as adjacent distinct slots. It is a pure function of the input
//! multiset, so scrambling the roster file cannot change the outcome.

use crate::errors::DrawError;

/// Canonicalize a raw participant roster.
///
/// Trims surrounding whitespace from every name, drops names that are empty
/// after trimming, and sorts the remainder in ascending byte-wise
/// (case-sensitive) order. Duplicate names survive as separate slots, each
/// carrying equal probability weight.
pub fn canonicalize(names: Vec<String>) -> Result<Vec<String>, DrawError> {
    let mut canonical: Vec<String> = names
        .into_iter()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect();

    if canonical.is_empty() {
        return Err(DrawError::EmptyParticipantList);
    }

    canonical.sort_unstable();
    Ok(canonical)
}
