//! # Draw Core - Deterministic Lucky-Draw Engine
//!
//! Commit-then-reveal draws: the organizer publishes a commitment to the
//! participant roster before an unpredictable public signal exists, then the
//! revealed signal drives a reproducible ranking that neither party can steer
//! and any third party can recompute.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | `canonical` | Order-independent canonical form of the roster |
//! | `commitment` | SHA-256 list commitment and draw digest / seed |
//! | `shuffle` | Seeded Fisher-Yates over the canonical roster |
//! | `draw` | Orchestrates a full draw and assembles the outcome |
//! | `roster` | Reads the roster file at the boundary |
//!
//! ## Reproducibility contract
//!
//! Identical roster multiset + identical signal = identical digest, seed and
//! ranking, on every platform. The frozen wire format and shuffle algorithm
//! are documented in `commitment` and `shuffle`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod commitment;
pub mod draw;
pub mod errors;
pub mod roster;
pub mod shuffle;

// Re-exports
pub use canonical::canonicalize;
pub use commitment::{derive, list_commitment, Hash, SeedDigest};
pub use draw::{DrawOutcome, DrawService};
pub use errors::DrawError;
pub use roster::load_roster;
pub use shuffle::shuffle_with_seed;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
