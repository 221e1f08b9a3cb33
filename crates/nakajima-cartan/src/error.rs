//! Errors raised while building Cartan data.

use thiserror::Error;

/// Errors that can occur when constructing matrices, Cartan types or weights.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CartanError {
    /// A row of a matrix literal has the wrong length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A Cartan matrix must be square.
    #[error("Cartan matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A diagonal entry of a Cartan matrix differs from 2.
    #[error("diagonal entry {index} of a Cartan matrix must be 2")]
    DiagonalNotTwo {
        /// Position on the diagonal.
        index: usize,
    },

    /// An off-diagonal entry of a Cartan matrix is positive.
    #[error("off-diagonal entry ({row}, {col}) of a Cartan matrix must be nonpositive")]
    PositiveOffDiagonal {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// `a_ij = 0` but `a_ji != 0`.
    #[error("entries ({row}, {col}) and ({col}, {row}) must vanish together")]
    AsymmetricZero {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// A lattice matrix does not have one row and one column per label.
    #[error("{labels} labels need a {labels}x{labels} Cartan matrix, got {rows}x{cols}")]
    IndexSetMismatch {
        /// Number of labels in the index set.
        labels: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// The rank is not allowed for the requested family.
    #[error("type {family}{rank} does not exist")]
    InvalidRank {
        /// Family letter.
        family: char,
        /// Requested rank.
        rank: usize,
    },

    /// A type string could not be parsed.
    #[error("cannot parse Cartan type {0:?}")]
    UnknownType(String),

    /// A weight mentions an index outside the index set.
    #[error("index {0} is not in the index set")]
    IndexNotInIndexSet(usize),
}
