//! Error types for commutation matrices and crystal operators.
//!
//! A missing crystal edge is not an error: `e_i` and `f_i` return
//! `Ok(None)` for it.

use nakajima_cartan::{CartanError, Weight};
use nakajima_integers::Integer;
use thiserror::Error;

use crate::exponents::Level;

/// Reasons a commutation matrix is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommutationError {
    /// The matrix does not match the rank of the Cartan datum.
    #[error("the c matrix must be {expected}x{expected}, got {rows}x{cols}")]
    Dimension {
        /// Rank of the Cartan datum.
        expected: usize,
        /// Rows supplied.
        rows: usize,
        /// Columns supplied.
        cols: usize,
    },

    /// A diagonal entry is nonzero.
    #[error("the c matrix must have 0's on the diagonal, found {value} at ({index}, {index})")]
    NonzeroDiagonal {
        /// Position on the diagonal.
        index: usize,
        /// Offending value.
        value: Integer,
    },

    /// An entry is negative, so shifted levels could drop below zero.
    #[error("the c matrix must have nonnegative entries, found {value} at ({i}, {j})")]
    NegativeEntry {
        /// Row of the entry.
        i: usize,
        /// Column of the entry.
        j: usize,
        /// The offending value.
        value: Integer,
    },

    /// `c_ij + c_ji != 1`.
    #[error("transpose entries do not sum to 1: c[{i}][{j}] + c[{j}][{i}] = {sum}")]
    NotComplementary {
        /// Row of the first entry.
        i: usize,
        /// Column of the first entry.
        j: usize,
        /// The offending sum.
        sum: Integer,
    },

    /// The matrix literal itself is malformed.
    #[error(transparent)]
    Malformed(#[from] CartanError),
}

/// Errors raised by crystal containers and the monomial algebra.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CrystalError {
    /// An operator was called with an index outside the index set.
    #[error("index {0} is not in the index set")]
    IndexNotInIndexSet(usize),

    /// A caller-supplied exponent map has a negative level.
    #[error("level {level} of ({index},{level}) must be a nonnegative integer")]
    NegativeLevel {
        /// Index of the offending key.
        index: usize,
        /// The negative level.
        level: Level,
    },

    /// The shifted column of an index falls outside the Cartan matrix.
    ///
    /// Happens only when a datum's labels disagree with its type flag,
    /// e.g. a finite datum labeled from `0`.
    #[error("index {index} does not address a column of the Cartan matrix")]
    ColumnOutOfRange {
        /// The crystal index.
        index: usize,
    },

    /// A level of `A_{i,k}` does not fit in a machine word.
    #[error("level of a factor for index {index} overflows")]
    LevelOverflow {
        /// The crystal index.
        index: usize,
    },

    /// A highest weight crystal was requested for a non-dominant weight.
    #[error("weight {0} is not dominant")]
    NotDominant(Weight),

    /// Highest weight crystals are realized with Y-monomials only.
    #[error("highest weight crystals require Y-monomials")]
    UnsupportedFlavor,

    /// The commutation matrix was rejected.
    #[error(transparent)]
    Commutation(#[from] CommutationError),

    /// The weight could not be attached to the datum.
    #[error(transparent)]
    Cartan(#[from] CartanError),
}
