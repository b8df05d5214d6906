//! Linear and affine subspaces of **F**₂ⁿ, found by exhaustive search.
//!
//! A linear subspace is a subset of **F**₂ⁿ that contains the zero vector and
//! is closed under pairwise XOR; an affine subspace is any coset of one. The
//! search here is deliberately naive: every non-empty subset of the 2ⁿ-point
//! universe is generated and tested for closure, which visits 2^(2ⁿ) − 1
//! candidates and is the resource-bounding step of the whole crate. Requests
//! past [`MAX_QUBITS`] are refused up front with
//! [`Error::QubitLimit`][crate::error::Error::QubitLimit] instead of being
//! allowed to run unboundedly.
//!
//! All output orders are canonical and reproducible: subsets are generated in
//! ascending-mask order over the canonical vector enumeration, and every
//! subspace keeps its points sorted by ascending binary value.

use std::{ fmt, iter::FusedIterator };
use rustc_hash::FxHashSet;
use crate::{ error::Error, gf2::{ self, Gf2Vec } };

/// Default ceiling on the qubit count accepted by the search entry points.
///
/// At n = 4 the subset search already tests 65535 candidates; at n = 5 it
/// would test 2³² − 1.
pub const MAX_QUBITS: usize = 4;

pub(crate) fn check_limit(n: usize, max: usize) -> Result<(), Error> {
    if n > max { Err(Error::QubitLimit { n, max }) } else { Ok(()) }
}

/// Test whether a set of equal-length vectors is a linear subspace.
///
/// Returns `true` iff the zero vector is a member and the XOR of every pair
/// of members (a vector with itself included) is also a member. Scalar
/// closure holds automatically over **F**₂ and is not tested separately.
///
/// An empty set or mismatched vector lengths violate the preconditions of
/// the test and are rejected as errors, never reported as `false`. Cost is
/// O(|S|²·m).
pub fn is_subspace(set: &[Gf2Vec]) -> Result<bool, Error> {
    let Some(first) = set.first() else { return Err(Error::EmptySet); };
    let m = first.len();
    if let Some(bad) = set.iter().find(|v| v.len() != m) {
        return Err(Error::LengthMismatch { expected: m, found: bad.len() });
    }
    let members: FxHashSet<Gf2Vec> = set.iter().copied().collect();
    if !members.contains(&Gf2Vec::zero(m)) { return Ok(false); }
    Ok(
        set.iter()
            .all(|u| set.iter().all(|v| members.contains(&(*u ^ *v))))
    )
}

/// Lazy producer of every non-empty subset of **F**₂ⁿ.
///
/// The subset for mask *t* contains the *i*-th canonical vector iff bit *i*
/// of *t* is set, and masks run in ascending order from 1, so the sequence is
/// deterministic and restartable from any point. Nothing is materialized
/// beyond the 2ⁿ-entry universe itself.
#[derive(Clone, Debug)]
pub struct Subsets {
    points: Vec<Gf2Vec>,
    next: u64,
    end: u64,
}

impl Subsets {
    /// Set up the subset sequence for the length-`n` universe.
    ///
    /// Supported for 2ⁿ < 64; the public search entry points gate far below
    /// this with [`MAX_QUBITS`].
    pub fn new(n: usize) -> Self {
        let points: Vec<Gf2Vec> = gf2::vectors(n).collect();
        debug_assert!(points.len() < 64);
        let end = 1 << points.len();
        Self { points, next: 1, end }
    }
}

impl Iterator for Subsets {
    type Item = Vec<Gf2Vec>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.end {
            let t = self.next;
            self.next += 1;
            let subset: Vec<Gf2Vec>
                = self.points.iter().enumerate()
                .filter(|(i, _)| t >> i & 1 != 0)
                .map(|(_, v)| *v)
                .collect();
            Some(subset)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = (self.end - self.next) as usize;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Subsets {
    fn len(&self) -> usize { (self.end - self.next) as usize }
}

impl FusedIterator for Subsets { }

/// A linear subspace of **F**₂ⁿ: contains zero, closed under XOR.
///
/// Points are held sorted by ascending binary value; |S| = 2ᵏ for the
/// subspace dimension k.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinearSubspace {
    ambient: usize,
    points: Vec<Gf2Vec>, // sorted ascending
}

impl LinearSubspace {
    fn from_points(ambient: usize, mut points: Vec<Gf2Vec>) -> Self {
        points.sort_unstable();
        Self { ambient, points }
    }

    /// The length of the member vectors.
    pub fn ambient(&self) -> usize { self.ambient }

    /// Number of members, always a power of two.
    pub fn len(&self) -> usize { self.points.len() }

    /// Always `false`; a subspace contains at least the zero vector.
    pub fn is_empty(&self) -> bool { false }

    /// The subspace dimension k = log₂|S|.
    pub fn dim(&self) -> usize { self.points.len().trailing_zeros() as usize }

    /// Members in ascending binary value.
    pub fn points(&self) -> &[Gf2Vec] { &self.points }

    /// Membership test.
    pub fn contains(&self, v: &Gf2Vec) -> bool {
        self.points.binary_search(v).is_ok()
    }
}

impl fmt::Display for LinearSubspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, &self.points)
    }
}

/// An affine subspace of **F**₂ⁿ: a coset {v ⊕ h} of a linear subspace.
///
/// Points are held sorted by ascending binary value, which is the canonical
/// form under which distinct shifts of the same subspace collapse to one
/// entry. |K| = 2ᵏ.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffineSubspace {
    ambient: usize,
    points: Vec<Gf2Vec>, // sorted ascending
}

impl AffineSubspace {
    /// Build the coset of `lin` shifted by `h`, in canonical form.
    ///
    /// Fails with [`Error::LengthMismatch`] if the shift does not live in the
    /// same ambient space, and with [`Error::BadCoset`] if the resulting point
    /// set does not have power-of-two size (which can only mean `lin` was not
    /// actually closed).
    pub fn coset(lin: &LinearSubspace, h: Gf2Vec) -> Result<Self, Error> {
        if h.len() != lin.ambient() {
            return Err(
                Error::LengthMismatch { expected: lin.ambient(), found: h.len() }
            );
        }
        let mut points: Vec<Gf2Vec>
            = lin.points().iter().map(|v| *v ^ h).collect();
        points.sort_unstable();
        if points.is_empty() || !points.len().is_power_of_two() {
            return Err(Error::BadCoset { size: points.len() });
        }
        Ok(Self { ambient: lin.ambient(), points })
    }

    /// The length of the member vectors.
    pub fn ambient(&self) -> usize { self.ambient }

    /// Number of members, always a power of two.
    pub fn len(&self) -> usize { self.points.len() }

    /// Always `false`; a coset is never empty.
    pub fn is_empty(&self) -> bool { false }

    /// The dimension k = log₂|K| of the underlying linear subspace.
    pub fn dim(&self) -> usize { self.points.len().trailing_zeros() as usize }

    /// Members in ascending binary value.
    pub fn points(&self) -> &[Gf2Vec] { &self.points }

    /// Membership test.
    pub fn contains(&self, v: &Gf2Vec) -> bool {
        self.points.binary_search(v).is_ok()
    }

    /// Recover the underlying linear subspace by shifting `self` back by its
    /// least member.
    ///
    /// The result is independent of which member is used as the shift, and of
    /// which shift originally produced `self`.
    pub fn linear_part(&self) -> LinearSubspace {
        let h = self.points[0];
        LinearSubspace::from_points(
            self.ambient,
            self.points.iter().map(|v| *v ^ h).collect(),
        )
    }
}

impl fmt::Display for AffineSubspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_points(f, &self.points)
    }
}

fn write_points(f: &mut fmt::Formatter<'_>, points: &[Gf2Vec]) -> fmt::Result {
    write!(f, "{{")?;
    let n = points.len();
    for (k, v) in points.iter().enumerate() {
        write!(f, "{}", v)?;
        if k < n - 1 { write!(f, ", ")?; }
    }
    write!(f, "}}")
}

/// All linear subspaces of **F**₂ⁿ, in canonical subset-search order.
///
/// Uses the default [`MAX_QUBITS`] ceiling; see [`linear_subspaces_bounded`].
pub fn linear_subspaces(n: usize) -> Result<Vec<LinearSubspace>, Error> {
    linear_subspaces_bounded(n, MAX_QUBITS)
}

/// Like [`linear_subspaces`], with an explicit ceiling on `n`.
pub fn linear_subspaces_bounded(n: usize, max: usize)
    -> Result<Vec<LinearSubspace>, Error>
{
    check_limit(n, max)?;
    let mut acc: Vec<LinearSubspace> = Vec::new();
    for cand in Subsets::new(n) {
        if is_subspace(&cand)? {
            acc.push(LinearSubspace::from_points(n, cand));
        }
    }
    Ok(acc)
}

/// All distinct affine subspaces of **F**₂ⁿ.
///
/// Every linear subspace is shifted by every vector of the universe; the
/// resulting cosets are deduplicated by their canonical (sorted) point sets
/// and returned in first-seen order. Every entry has power-of-two size and
/// no two entries are equal as sets.
///
/// Uses the default [`MAX_QUBITS`] ceiling; see [`affine_subspaces_bounded`].
pub fn affine_subspaces(n: usize) -> Result<Vec<AffineSubspace>, Error> {
    affine_subspaces_bounded(n, MAX_QUBITS)
}

/// Like [`affine_subspaces`], with an explicit ceiling on `n`.
pub fn affine_subspaces_bounded(n: usize, max: usize)
    -> Result<Vec<AffineSubspace>, Error>
{
    check_limit(n, max)?;
    let linear = linear_subspaces_bounded(n, max)?;
    let mut seen: FxHashSet<AffineSubspace> = FxHashSet::default();
    let mut acc: Vec<AffineSubspace> = Vec::new();
    for lin in linear.iter() {
        for h in gf2::vectors(n) {
            let coset = AffineSubspace::coset(lin, h)?;
            if seen.insert(coset.clone()) { acc.push(coset); }
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod test {
    use rand::Rng;
    use super::*;

    fn vs(m: usize, indices: &[usize]) -> Vec<Gf2Vec> {
        indices.iter().map(|i| Gf2Vec::from_index(m, *i)).collect()
    }

    #[test]
    fn classifier_accepts_subspaces() {
        assert_eq!(is_subspace(&vs(1, &[0])), Ok(true));
        assert_eq!(is_subspace(&vs(1, &[0, 1])), Ok(true));
        assert_eq!(is_subspace(&vs(2, &[0, 1, 2, 3])), Ok(true));
        assert_eq!(is_subspace(&vs(3, &[0, 3, 5, 6])), Ok(true));
    }

    #[test]
    fn classifier_rejects_non_subspaces() {
        // no zero vector
        assert_eq!(is_subspace(&vs(1, &[1])), Ok(false));
        // not closed: 01 ^ 10 = 11 missing
        assert_eq!(is_subspace(&vs(2, &[0, 1, 2])), Ok(false));
    }

    #[test]
    fn classifier_preconditions_are_distinct() {
        assert_eq!(is_subspace(&[]), Err(Error::EmptySet));
        let mixed = vec![Gf2Vec::zero(2), Gf2Vec::zero(3)];
        assert_eq!(
            is_subspace(&mixed),
            Err(Error::LengthMismatch { expected: 2, found: 3 }),
        );
    }

    #[test]
    fn subsets_cover_the_power_set() {
        let subs: Vec<Vec<Gf2Vec>> = Subsets::new(2).collect();
        assert_eq!(subs.len(), 15);
        assert_eq!(subs[0], vs(2, &[0]));
        assert_eq!(subs[14], vs(2, &[0, 1, 2, 3]));
        assert_eq!(Subsets::new(2).len(), 15);
    }

    #[test]
    fn linear_subspace_counts() {
        assert_eq!(linear_subspaces(0).unwrap().len(), 1);
        assert_eq!(linear_subspaces(1).unwrap().len(), 2);
        assert_eq!(linear_subspaces(2).unwrap().len(), 5);
        assert_eq!(linear_subspaces(3).unwrap().len(), 16);
    }

    #[test]
    fn affine_subspace_counts() {
        assert_eq!(affine_subspaces(0).unwrap().len(), 1);
        assert_eq!(affine_subspaces(1).unwrap().len(), 3);
        assert_eq!(affine_subspaces(2).unwrap().len(), 11);
        assert_eq!(affine_subspaces(3).unwrap().len(), 51);
    }

    #[test]
    fn affine_subspaces_are_distinct_power_of_two_sets() {
        let affine = affine_subspaces(3).unwrap();
        assert!(affine.iter().all(|k| k.len().is_power_of_two()));
        let mut seen: FxHashSet<&AffineSubspace> = FxHashSet::default();
        assert!(affine.iter().all(|k| seen.insert(k)));
    }

    #[test]
    fn cosets_close_under_pairwise_xor() {
        for coset in affine_subspaces(2).unwrap() {
            let lin = coset.linear_part();
            for x in coset.points() {
                for y in coset.points() {
                    assert!(lin.contains(&(*x ^ *y)));
                }
            }
        }
    }

    #[test]
    fn linear_part_is_shift_independent() {
        let mut rng = rand::thread_rng();
        for coset in affine_subspaces(3).unwrap() {
            let expected = coset.linear_part();
            for _ in 0..4 {
                let x = coset.points()[rng.gen_range(0..coset.len())];
                let shifted: Vec<Gf2Vec>
                    = coset.points().iter().map(|v| *v ^ x).collect();
                assert!(is_subspace(&shifted).unwrap());
                assert_eq!(
                    LinearSubspace::from_points(coset.ambient(), shifted),
                    expected,
                );
            }
        }
    }

    #[test]
    fn ceiling_is_enforced() {
        assert_eq!(
            linear_subspaces(5),
            Err(Error::QubitLimit { n: 5, max: MAX_QUBITS }),
        );
        assert_eq!(
            affine_subspaces_bounded(3, 2),
            Err(Error::QubitLimit { n: 3, max: 2 }),
        );
    }
}
