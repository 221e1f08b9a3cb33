//! The commutation matrix `C = (c_ij)`.
//!
//! The factors `A_{i,k}` depend on a choice of integers with
//! `c_ij + c_ji = 1` for `i != j`. The crystal does not depend on the choice
//! up to isomorphism, but the monomials do, so the choice is fixed per
//! container and validated once.

use std::fmt;

use log::debug;
use nakajima_cartan::IntegerMatrix;
use nakajima_integers::Integer;
use num_traits::{One, Zero};

use crate::error::CommutationError;

/// A validated, immutable commutation matrix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommutationMatrix(IntegerMatrix);

impl CommutationMatrix {
    /// The default choice: `c_ij = 1` if `i < j` and `0` otherwise.
    #[must_use]
    pub fn standard(n: usize) -> Self {
        Self(IntegerMatrix::square_from_fn(n, |i, j| i64::from(i < j)))
    }

    /// Validates `matrix` as a commutation matrix of any size.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, has a nonzero diagonal
    /// entry or a negative entry, or has a pair with `c_ij + c_ji != 1`.
    pub fn new(matrix: IntegerMatrix) -> Result<Self, CommutationError> {
        let n = matrix.num_rows();
        Self::validate(n, &matrix)?;
        Ok(Self(matrix))
    }

    /// Builds the commutation matrix for a datum of rank `n`, using the
    /// default when `matrix` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the supplied matrix is not `n x n` or fails
    /// validation.
    pub fn for_rank(n: usize, matrix: Option<IntegerMatrix>) -> Result<Self, CommutationError> {
        match matrix {
            None => Ok(Self::standard(n)),
            Some(matrix) => {
                Self::validate(n, &matrix)?;
                Ok(Self(matrix))
            }
        }
    }

    /// Builds and validates a commutation matrix from rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged or the matrix fails
    /// validation.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, CommutationError> {
        Self::new(IntegerMatrix::from_rows(rows)?)
    }

    fn validate(n: usize, matrix: &IntegerMatrix) -> Result<(), CommutationError> {
        let result = Self::check(n, matrix);
        if let Err(err) = &result {
            debug!("rejected commutation matrix: {err}");
        }
        result
    }

    fn check(n: usize, matrix: &IntegerMatrix) -> Result<(), CommutationError> {
        if matrix.num_rows() != n || matrix.num_cols() != n {
            return Err(CommutationError::Dimension {
                expected: n,
                rows: matrix.num_rows(),
                cols: matrix.num_cols(),
            });
        }
        for i in 0..n {
            if !matrix[(i, i)].is_zero() {
                return Err(CommutationError::NonzeroDiagonal {
                    index: i,
                    value: matrix[(i, i)].clone(),
                });
            }
            for j in 0..n {
                if matrix[(i, j)].is_negative() {
                    return Err(CommutationError::NegativeEntry {
                        i,
                        j,
                        value: matrix[(i, j)].clone(),
                    });
                }
            }
            for j in 0..i {
                let sum = &matrix[(i, j)] + &matrix[(j, i)];
                if !sum.is_one() {
                    return Err(CommutationError::NotComplementary { i, j, sum });
                }
            }
        }
        Ok(())
    }

    /// Returns the size of the matrix.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.0.num_rows()
    }

    /// Returns `c_ij` by position.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&Integer> {
        self.0.get(i, j)
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &IntegerMatrix {
        &self.0
    }
}

impl fmt::Display for CommutationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
