//! Generation failure taxonomy
//!
//! Per-seed failures (a bad seed) never halt a batch; a broken static data
//! contract always does. Missing army slots are not failures at all: the
//! slot stays empty and generation still succeeds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use ms_data::DataError;

use crate::result::Modes;

/// Record emitted exactly once when the bravery retry ceiling is
/// exceeded. The Display form is the bad-seed log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Seed: {seed} - Game modes: {modes}")]
pub struct BadSeed {
    pub seed: i32,
    pub modes: Modes,
}

/// Why a `generate` call produced no result.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The bravery assignment could not satisfy its reachability
    /// invariants within the retry ceiling. Per-seed; callers keep going.
    #[error(transparent)]
    BadSeed(#[from] BadSeed),

    /// The static domain contract is broken. Fatal; abort the run.
    #[error(transparent)]
    Data(#[from] DataError),
}

impl GenerateError {
    /// The bad-seed record, when this failure is one.
    pub fn bad_seed(&self) -> Option<BadSeed> {
        match self {
            GenerateError::BadSeed(record) => Some(*record),
            GenerateError::Data(_) => None,
        }
    }
}
