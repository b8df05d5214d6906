//! Driver for the full enumeration: every affine subspace of **F**₂ⁿ crossed
//! with every admissible pair of forms.
//!
//! For each support *K* of dimension *k* there are 2^(k(k+1)/2) quadratic
//! forms and 2ᵏ linear forms, so the record total is
//!
//! > Σ_K 2ᵏ · 2^(k(k+1)/2)
//!
//! which must equal the number of stabilizer states on *n* qubits,
//! 2ⁿ·Π_{k=1..n}(2ᵏ + 1): 6, 60, 1080, 36720 for *n* = 1, 2, 3, 4. Record
//! order is deterministic: supports in subset-search order, quadratic form
//! outer, linear form inner.
//!
//! Counting ([`count`]) walks the supports without materializing any records;
//! materializing every vector ([`states`]) is practical through *n* = 3 and
//! expensive at *n* = 4.

use itertools::Itertools;
use ndarray as nd;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use crate::{
    error::Error,
    form,
    state::AffineState,
    subspace::{ self, MAX_QUBITS },
};

/// All affine-form triples for `n` qubits, in canonical order.
///
/// Uses the default [`MAX_QUBITS`] ceiling; see [`records_bounded`].
pub fn records(n: usize) -> Result<Vec<AffineState>, Error> {
    records_bounded(n, MAX_QUBITS)
}

/// Like [`records`], with an explicit ceiling on `n`.
pub fn records_bounded(n: usize, max: usize)
    -> Result<Vec<AffineState>, Error>
{
    let supports = subspace::affine_subspaces_bounded(n, max)?;
    let mut acc: Vec<AffineState> = Vec::new();
    for support in supports.into_iter() {
        let k = support.dim();
        let pairs = form::quadratic_forms(k)
            .cartesian_product(form::linear_forms(k));
        for (quadratic, linear) in pairs {
            acc.push(AffineState::new(support.clone(), linear, quadratic)?);
        }
    }
    Ok(acc)
}

/// All records paired with their materialized amplitude vectors.
pub fn states(n: usize)
    -> Result<Vec<(AffineState, nd::Array1<C64>)>, Error>
{
    let paired = records(n)?
        .into_iter()
        .map(|record| {
            let amps = record.to_vector();
            (record, amps)
        })
        .collect();
    Ok(paired)
}

/// The record total for `n` qubits, without materializing any records.
///
/// Uses the default [`MAX_QUBITS`] ceiling; see [`count_bounded`].
pub fn count(n: usize) -> Result<u128, Error> {
    count_bounded(n, MAX_QUBITS)
}

/// Like [`count`], with an explicit ceiling on `n`.
pub fn count_bounded(n: usize, max: usize) -> Result<u128, Error> {
    let supports = subspace::affine_subspaces_bounded(n, max)?;
    let total = supports.iter()
        .map(|support| {
            let k = support.dim() as u32;
            (1_u128 << k) * (1_u128 << (k * (k + 1) / 2))
        })
        .sum();
    Ok(total)
}

static SMALL_COUNTS: Lazy<Vec<u128>>
    = Lazy::new(|| (0..=MAX_QUBITS).map(closed_form).collect());

fn closed_form(n: usize) -> u128 {
    (1_u128 << n) * (1..=n).map(|k| (1_u128 << k) + 1).product::<u128>()
}

/// The number of stabilizer states on `n` qubits, from the closed form
/// 2ⁿ·Π_{k=1..n}(2ᵏ + 1).
///
/// This is the independent cross-check the enumeration must reproduce.
pub fn stabilizer_count(n: usize) -> u128 {
    SMALL_COUNTS.get(n).copied().unwrap_or_else(|| closed_form(n))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_totals() {
        assert_eq!(records(1).unwrap().len(), 6);
        assert_eq!(records(2).unwrap().len(), 60);
        assert_eq!(records(3).unwrap().len(), 1080);
    }

    #[test]
    fn count_matches_records() {
        for n in 0..=3 {
            assert_eq!(
                count(n).unwrap(),
                records(n).unwrap().len() as u128,
            );
        }
    }

    #[test]
    fn count_matches_closed_form() {
        for n in 0..=4 {
            assert_eq!(count(n).unwrap(), stabilizer_count(n));
        }
    }

    #[test]
    fn closed_form_values() {
        assert_eq!(stabilizer_count(0), 1);
        assert_eq!(stabilizer_count(1), 6);
        assert_eq!(stabilizer_count(2), 60);
        assert_eq!(stabilizer_count(3), 1080);
        assert_eq!(stabilizer_count(4), 36720);
        assert_eq!(stabilizer_count(5), 2423520);
    }

    #[test]
    fn zero_qubits() {
        let all = states(0).unwrap();
        assert_eq!(all.len(), 1);
        let (record, amps) = &all[0];
        assert_eq!(record.num_qubits(), 0);
        assert_eq!(amps.to_vec(), vec![num_complex::Complex64::new(1.0, 0.0)]);
    }

    #[test]
    fn enumeration_is_deterministic() {
        assert_eq!(records(2).unwrap(), records(2).unwrap());
    }

    #[test]
    fn ceiling_is_enforced() {
        assert_eq!(
            records(5),
            Err(Error::QubitLimit { n: 5, max: MAX_QUBITS }),
        );
        assert_eq!(
            count_bounded(4, 3),
            Err(Error::QubitLimit { n: 4, max: 3 }),
        );
    }

    #[test]
    fn record_order_groups_by_support() {
        let records = records(1).unwrap();
        assert_eq!(records[0].support().len(), 1);
        assert_eq!(records[1].support().len(), 1);
        assert!(records[2..].iter().all(|r| r.support().len() == 2));
    }
}
