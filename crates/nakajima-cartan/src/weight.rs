//! Weight lattice realization in the basis of fundamental weights.
//!
//! A weight is stored as its coordinates against `{Lambda_i}`. With this
//! choice the simple coroots act as coordinate projections,
//! `<h_i, Lambda_j> = delta_ij`, and the simple root `alpha_i` is the
//! `i`-th column of the Cartan matrix read as a weight.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Neg, Sub};

use nakajima_integers::Integer;
use num_traits::{One, Zero};

use crate::error::CartanError;
use crate::matrix::IntegerMatrix;

/// An integral weight, `sum_i c_i Lambda_i`, with zero coefficients dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Weight {
    coefficients: BTreeMap<usize, Integer>,
}

impl Weight {
    /// The zero weight.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The fundamental weight `Lambda_i` as a bare coordinate vector.
    #[must_use]
    pub fn fundamental(index: usize) -> Self {
        Self::from_coefficients([(index, Integer::one())])
    }

    /// Builds a weight from `(index, coefficient)` pairs.
    ///
    /// Repeated indices accumulate and zero coefficients are dropped.
    pub fn from_coefficients<I, C>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, C)>,
        C: Into<Integer>,
    {
        let mut weight = Self::zero();
        for (index, c) in terms {
            weight.accumulate(index, &c.into());
        }
        weight
    }

    fn accumulate(&mut self, index: usize, delta: &Integer) {
        if delta.is_zero() {
            return;
        }
        let entry = self.coefficients.entry(index).or_insert_with(Integer::zero);
        *entry += delta;
        if entry.is_zero() {
            self.coefficients.remove(&index);
        }
    }

    /// Returns the coefficient of `Lambda_index`.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> Integer {
        self.coefficients
            .get(&index)
            .cloned()
            .unwrap_or_else(Integer::zero)
    }

    /// Iterates over the nonzero `(index, coefficient)` terms in index order.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &Integer)> {
        self.coefficients.iter().map(|(&i, c)| (i, c))
    }

    /// Iterates over the indices with nonzero coefficient.
    pub fn support(&self) -> impl Iterator<Item = usize> + '_ {
        self.coefficients.keys().copied()
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Returns true if no coefficient is negative.
    #[must_use]
    pub fn is_dominant(&self) -> bool {
        self.coefficients.values().all(|c| !c.is_negative())
    }

    /// Multiplies every coefficient by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: &Integer) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        Self {
            coefficients: self
                .coefficients
                .iter()
                .map(|(&i, c)| (i, c * scalar))
                .collect(),
        }
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (index, c) in &rhs.coefficients {
            self.accumulate(*index, c);
        }
        self
    }
}

impl Add<&Weight> for &Weight {
    type Output = Weight;

    fn add(self, rhs: &Weight) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl Sub for Weight {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Sub<&Weight> for &Weight {
    type Output = Weight;

    fn sub(self, rhs: &Weight) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl Neg for Weight {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            coefficients: self.coefficients.into_iter().map(|(i, c)| (i, -c)).collect(),
        }
    }
}

/// Renders as `-2*Lambda[0] + Lambda[1]`, or `0` for the zero weight.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (n, (index, c)) in self.terms().enumerate() {
            let magnitude = c.abs();
            match (n, c.is_negative()) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            write!(f, "Lambda[{index}]")?;
        }
        Ok(())
    }
}

/// The simple coroot `h_i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coroot(usize);

impl Coroot {
    /// Returns the index `i` of `h_i`.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Coroot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h[{}]", self.0)
    }
}

/// The weight lattice of a Cartan datum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightLattice {
    index_set: Vec<usize>,
    cartan: IntegerMatrix,
}

impl WeightLattice {
    /// Creates the lattice for an index set and a Cartan matrix whose rows
    /// and columns follow the index set order.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::IndexSetMismatch`] unless the matrix is
    /// `n x n` for `n` labels.
    pub fn new(index_set: Vec<usize>, cartan: IntegerMatrix) -> Result<Self, CartanError> {
        let labels = index_set.len();
        if cartan.num_rows() != labels || cartan.num_cols() != labels {
            return Err(CartanError::IndexSetMismatch {
                labels,
                rows: cartan.num_rows(),
                cols: cartan.num_cols(),
            });
        }
        Ok(Self { index_set, cartan })
    }

    /// Returns the index set.
    #[must_use]
    pub fn index_set(&self) -> &[usize] {
        &self.index_set
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.index_set.iter().position(|&j| j == index)
    }

    /// Returns the fundamental weights keyed by index.
    #[must_use]
    pub fn fundamental_weights(&self) -> BTreeMap<usize, Weight> {
        self.index_set
            .iter()
            .map(|&i| (i, Weight::fundamental(i)))
            .collect()
    }

    /// Returns the simple coroots keyed by index.
    #[must_use]
    pub fn simple_coroots(&self) -> BTreeMap<usize, Coroot> {
        self.index_set.iter().map(|&i| (i, Coroot(i))).collect()
    }

    /// Returns the simple coroot `h_index`, if the index exists.
    #[must_use]
    pub fn simple_coroot(&self, index: usize) -> Option<Coroot> {
        self.position(index).map(|_| Coroot(index))
    }

    /// Evaluates `<h, weight>`.
    #[must_use]
    pub fn pairing(&self, coroot: Coroot, weight: &Weight) -> Integer {
        weight.coefficient(coroot.index())
    }

    /// Returns the simple root `alpha_index = sum_j a_{j,index} Lambda_j`.
    #[must_use]
    pub fn simple_root(&self, index: usize) -> Option<Weight> {
        let col = self.position(index)?;
        Some(Weight::from_coefficients(
            self.index_set
                .iter()
                .enumerate()
                .map(|(row, &j)| (j, self.cartan[(row, col)].clone())),
        ))
    }

    /// Returns true if every index in the support of `weight` is in the
    /// index set.
    #[must_use]
    pub fn contains(&self, weight: &Weight) -> bool {
        weight.support().all(|i| self.position(i).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a2_lattice() -> WeightLattice {
        let cartan = IntegerMatrix::from_rows(&[vec![2, -1], vec![-1, 2]]).unwrap();
        WeightLattice::new(vec![1, 2], cartan).unwrap()
    }

    #[test]
    fn test_lattice_rejects_mismatched_matrix() {
        let cartan = IntegerMatrix::from_rows(&[vec![2, -1], vec![-1, 2]]).unwrap();
        let err = WeightLattice::new(vec![1, 2, 3], cartan).unwrap_err();
        assert_eq!(
            err,
            CartanError::IndexSetMismatch {
                labels: 3,
                rows: 2,
                cols: 2
            }
        );

        let wide = IntegerMatrix::from_rows(&[vec![2, -1, 0], vec![-1, 2, -1]]).unwrap();
        let err = WeightLattice::new(vec![1, 2], wide).unwrap_err();
        assert_eq!(
            err,
            CartanError::IndexSetMismatch {
                labels: 2,
                rows: 2,
                cols: 3
            }
        );
    }

    #[test]
    fn test_weight_arithmetic() {
        let la1 = Weight::fundamental(1);
        let la2 = Weight::fundamental(2);
        let w = &la1 + &la2.scale(&Integer::new(2));
        assert_eq!(w.coefficient(2), Integer::new(2));
        assert!((&w - &w).is_zero());
        assert_eq!((la1.clone() - la1).to_string(), "0");
    }

    #[test]
    fn test_weight_display() {
        let w = Weight::from_coefficients([(0, -2), (1, 1)]);
        assert_eq!(w.to_string(), "-2*Lambda[0] + Lambda[1]");
        let w = Weight::from_coefficients([(1, 1), (3, -1)]);
        assert_eq!(w.to_string(), "Lambda[1] - Lambda[3]");
    }

    #[test]
    fn test_dominance() {
        assert!(Weight::from_coefficients([(1, 3), (2, 0)]).is_dominant());
        assert!(!Weight::from_coefficients([(1, 3), (2, -1)]).is_dominant());
        assert_eq!(Weight::from_coefficients([(1, 3), (2, 0)]).support().count(), 1);
    }

    #[test]
    fn test_pairing_is_projection() {
        let lattice = a2_lattice();
        let w = Weight::from_coefficients([(1, 4), (2, -1)]);
        let h = lattice.simple_coroots();
        assert_eq!(lattice.pairing(h[&1], &w), Integer::new(4));
        assert_eq!(lattice.pairing(h[&2], &w), Integer::new(-1));
        assert_eq!(lattice.simple_coroot(3), None);
    }

    #[test]
    fn test_simple_roots_are_columns() {
        let lattice = a2_lattice();
        let alpha1 = lattice.simple_root(1).unwrap();
        assert_eq!(alpha1, Weight::from_coefficients([(1, 2), (2, -1)]));
        assert_eq!(lattice.simple_root(0), None);
    }

    #[test]
    fn test_fundamental_weights() {
        let lattice = a2_lattice();
        let la = lattice.fundamental_weights();
        assert_eq!(la.len(), 2);
        assert_eq!(la[&2], Weight::fundamental(2));
        assert!(lattice.contains(&(&la[&1] + &la[&2])));
        assert!(!lattice.contains(&Weight::fundamental(7)));
    }
}
