//! Exhaustive enumeration of *n*-qubit stabilizer states in their affine-form
//! representation.
//!
//! Up to normalization, every *n*-qubit stabilizer state can be written as a
//! sum over the points of an affine subspace *K* ⊆ **F**₂ⁿ of dimension *k*,
//! with the amplitude on each point fixed by a quadratic form *J* and a linear
//! form *b* on **F**₂ᵏ:
//!
//! > ∣ψ⟩ = Σ_α (−1)^(α·J·αᵀ) i^(b·α) ∣x(α)⟩,  α ∈ **F**₂ᵏ
//!
//! so the triple (*K*, *b*, *J*) identifies the state completely. This crate
//! finds every such triple by brute force (all subsets of **F**₂ⁿ are tested
//! for subspace closure, every subspace is shifted into its cosets, and every
//! admissible pair of forms is generated) and converts each triple into its
//! unnormalized, length-2ⁿ complex amplitude vector. The totals reproduce the
//! known stabilizer-state counts 6, 60, and 1080 for *n* = 1, 2, 3.
//!
//! The subset search visits 2^(2ⁿ) − 1 candidates, so the machinery is usable
//! only for very small registers (*n* ≤ 4); larger requests are refused up
//! front rather than left to run unboundedly.
//!
//! # Example
//! ```
//! use stab_enum::enumerate;
//!
//! // all six single-qubit stabilizer states
//! let records = enumerate::records(1).unwrap();
//! assert_eq!(records.len(), 6);
//! for record in records.iter() {
//!     println!("{}", record.kets());
//! }
//! ```

pub mod error;
pub mod gf2;
pub mod subspace;
pub mod form;
pub mod phase;
pub mod state;
pub mod enumerate;
