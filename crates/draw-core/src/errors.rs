//! Draw error types.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can abort a draw.
///
/// Every failure here is a deterministic input-validation failure, not a
/// transient fault, so there is no retry path anywhere in the crate.
#[derive(Debug, Error)]
pub enum DrawError {
    /// No usable participant names after trimming and blank-line removal
    #[error("participant list is empty after trimming and blank-line removal")]
    EmptyParticipantList,

    /// Requested winner count is not a positive integer
    #[error("winner count must be at least 1, got {requested}")]
    InvalidWinnerCount {
        /// The winner count the caller asked for
        requested: usize,
    },

    /// Roster file is missing or unreadable
    #[error("cannot read roster file {}", path.display())]
    UnreadableInput {
        /// Path of the roster file that failed to load
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Revealed signal is empty or whitespace-only
    #[error("revealed signal is empty or whitespace-only")]
    EmptySignal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_display() {
        let err = DrawError::EmptyParticipantList;
        assert_eq!(
            err.to_string(),
            "participant list is empty after trimming and blank-line removal"
        );
    }

    #[test]
    fn test_invalid_winner_count_display() {
        let err = DrawError::InvalidWinnerCount { requested: 0 };
        assert_eq!(err.to_string(), "winner count must be at least 1, got 0");
    }

    #[test]
    fn test_unreadable_input_display() {
        let err = DrawError::UnreadableInput {
            path: PathBuf::from("/no/such/roster.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read roster file /no/such/roster.txt"
        );
    }
}
