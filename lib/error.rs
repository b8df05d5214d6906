//! Error types for the subset search and state construction.

use thiserror::Error;

/// Errors produced while enumerating subspaces or building states.
///
/// The enumeration is a pure function of its inputs, so none of these are
/// transient; nothing is ever retried.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A qubit count whose search universe exceeds the configured ceiling.
    ///
    /// The subset search visits 2^(2ⁿ) − 1 candidates; requests past the
    /// ceiling are refused before any enumeration begins.
    #[error("qubit count {n} exceeds the practical search ceiling {max}")]
    QubitLimit { n: usize, max: usize },

    /// A subspace test was invoked on an empty set.
    #[error("subspace test requires a non-empty set")]
    EmptySet,

    /// Vectors of unequal length where a single length is required.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// An internally produced coset whose size is not a power of two.
    ///
    /// Cosets of a linear subspace always have power-of-two size, so this
    /// indicates a bug in the classifier or the coset builder, never a
    /// recoverable input condition.
    #[error("internal error: coset of size {size} is not a power of two")]
    BadCoset { size: usize },
}
