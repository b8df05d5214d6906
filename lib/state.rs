//! Construction of stabilizer-state amplitude vectors from affine-form
//! triples.
//!
//! A state here is fixed by a triple (*K*, *b*, *J*): an affine subspace
//! *K* ⊆ **F**₂ⁿ of dimension *k* carrying the support, plus a linear form
//! *b* and a quadratic form *J* on the coordinate space **F**₂ᵏ fixing the
//! phases. The amplitude attached to coordinate vector α is
//! (−1)^(α·J·αᵀ)·i^(b·α), always of modulus exactly 1, so the resulting
//! length-2ⁿ vector is *not* normalized: its squared magnitudes sum to
//! |K| = 2ᵏ. Normalization is left to the caller.

use std::fmt;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    error::Error,
    form::{ LinearForm, QuadraticForm },
    gf2::{ self, Gf2Vec },
    phase::Phase,
    subspace::AffineSubspace,
};

/// One affine-form triple (*K*, *b*, *J*), uniquely identifying a stabilizer
/// state of `support.ambient()` qubits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineState {
    support: AffineSubspace,
    linear: LinearForm,
    quadratic: QuadraticForm,
}

impl AffineState {
    /// Assemble a triple, verifying that both forms live on the coordinate
    /// space **F**₂ᵏ for k = log₂|K|.
    pub fn new(
        support: AffineSubspace,
        linear: LinearForm,
        quadratic: QuadraticForm,
    ) -> Result<Self, Error>
    {
        let k = support.dim();
        if linear.dim() != k {
            return Err(Error::LengthMismatch { expected: k, found: linear.dim() });
        }
        if quadratic.dim() != k {
            return Err(
                Error::LengthMismatch { expected: k, found: quadratic.dim() }
            );
        }
        Ok(Self { support, linear, quadratic })
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize { self.support.ambient() }

    /// The support dimension k.
    pub fn dim(&self) -> usize { self.support.dim() }

    /// The support *K*.
    pub fn support(&self) -> &AffineSubspace { &self.support }

    /// The linear form *b*.
    pub fn linear(&self) -> &LinearForm { &self.linear }

    /// The quadratic form *J*.
    pub fn quadratic(&self) -> &QuadraticForm { &self.quadratic }

    /// The phase attached to coordinate vector α: i^(b·α)·(−1)^(α·J·αᵀ).
    pub fn amplitude(&self, alpha: &Gf2Vec) -> Phase {
        let l = i8::from(self.linear.eval(alpha));
        let q = i8::from(self.quadratic.eval(alpha));
        Phase::from_int(l + 2 * q)
    }

    /// Build the length-2ⁿ complex amplitude vector.
    ///
    /// Coordinate vectors α run over **F**₂ᵏ in the canonical order of
    /// [`gf2::vectors`] and are paired position for position with the members
    /// of *K* in ascending binary value: coordinate *i* belongs to the *i*-th
    /// smallest point. This pairing is a fixed convention of the
    /// representation (it is *not* a basis expansion x = Σ αⱼgⱼ through
    /// chosen generators of the underlying linear subspace, which can attach
    /// the same phases to different points); it is applied identically
    /// everywhere and must not be changed in isolation.
    ///
    /// Entries at indices outside *K* are exactly 0; the 2ᵏ entries on *K*
    /// have modulus 1, so the vector is unnormalized.
    pub fn to_vector(&self) -> nd::Array1<C64> {
        let mut amps: nd::Array1<C64>
            = nd::Array1::zeros(1 << self.num_qubits());
        let iter = gf2::vectors(self.dim()).zip(self.support.points());
        for (alpha, point) in iter {
            amps[point.index()] = self.amplitude(&alpha).as_complex();
        }
        amps
    }

    /// Render `self` as a sum of phased basis kets.
    pub fn kets(&self) -> Kets {
        let terms: Vec<BasisTerm>
            = gf2::vectors(self.dim())
            .zip(self.support.points())
            .map(|(alpha, point)| {
                BasisTerm { phase: self.amplitude(&alpha), point: *point }
            })
            .collect();
        Kets(terms)
    }
}

/// A single basis state in the product space of n qubits, with a phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BasisTerm {
    pub phase: Phase,
    pub point: Gf2Vec,
}

impl fmt::Display for BasisTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}∣{}⟩", self.phase, self.point)
    }
}

/// A superposition of basis states.
///
/// All amplitudes are equal in magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kets(pub Vec<BasisTerm>);

impl fmt::Display for Kets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        for (k, term) in self.0.iter().enumerate() {
            write!(f, "{}", term)?;
            if k < n - 1 { write!(f, " ")?; }
        }
        Ok(())
    }
}
