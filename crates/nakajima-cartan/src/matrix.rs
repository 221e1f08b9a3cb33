//! Dense integer matrices.
//!
//! Cartan and commutation matrices are tiny (rank at most a few dozen), so a
//! row-major `Vec` gives the best locality and the simplest indexing.

use std::fmt;
use std::ops::Index;

use nakajima_integers::Integer;

use crate::error::CartanError;

/// Dense matrix of arbitrary precision integers stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Integer>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl IntegerMatrix {
    /// Creates a square matrix whose entry `(i, j)` is `f(i, j)`.
    #[must_use]
    pub fn square_from_fn(n: usize, mut f: impl FnMut(usize, usize) -> i64) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(Integer::new(f(i, j)));
            }
        }
        Self {
            data,
            num_rows: n,
            num_cols: n,
        }
    }

    /// Creates a matrix from rows of machine integers.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, CartanError> {
        Self::from_integer_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| Integer::new(v)).collect())
                .collect(),
        )
    }

    /// Creates a matrix from rows of integers.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::RaggedRows`] if the rows differ in length.
    pub fn from_integer_rows(rows: Vec<Vec<Integer>>) -> Result<Self, CartanError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != num_cols {
                return Err(CartanError::RaggedRows {
                    row,
                    expected: num_cols,
                    found: entries.len(),
                });
            }
            data.extend(entries);
        }
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Integer> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Integer] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Returns true if the matrix equals its transpose.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.is_square()
            && (0..self.num_rows)
                .all(|i| (0..i).all(|j| self[(i, j)] == self[(j, i)]))
    }
}

impl Index<(usize, usize)> for IntegerMatrix {
    type Output = Integer;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

/// Renders one bracketed row per line with right-aligned columns:
///
/// ```text
/// [ 2 -1]
/// [-1  2]
/// ```
impl fmt::Display for IntegerMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);
        for row in 0..self.num_rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for col in 0..self.num_cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cells[row * self.num_cols + col])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
