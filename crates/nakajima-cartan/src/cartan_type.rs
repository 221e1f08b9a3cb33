//! Reference Cartan data.
//!
//! Cartan matrices follow the convention `a_ij = <h_i, alpha_j>` with
//! Bourbaki labeling, so that for `B_n` the last row carries the `-2` and for
//! `C_n` the last column does.

use std::fmt;
use std::str::FromStr;

use nakajima_integers::Integer;
use num_traits::Zero;

use crate::datum::CartanDatum;
use crate::error::CartanError;
use crate::matrix::IntegerMatrix;
use crate::weight::WeightLattice;

/// Family letter of a Cartan type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartanFamily {
    /// `A_n`, `n >= 1`.
    A,
    /// `B_n`, `n >= 2`.
    B,
    /// `C_n`, `n >= 2`.
    C,
    /// `D_n`, `n >= 3`.
    D,
    /// `E_6`, `E_7`, `E_8`.
    E,
    /// `F_4`.
    F,
    /// `G_2`.
    G,
}

impl CartanFamily {
    /// Returns the family letter.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }

    /// Parses a family letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            _ => None,
        }
    }

    fn admits_rank(self, rank: usize) -> bool {
        match self {
            Self::A => rank >= 1,
            Self::B | Self::C => rank >= 2,
            Self::D => rank >= 3,
            Self::E => (6..=8).contains(&rank),
            Self::F => rank == 4,
            Self::G => rank == 2,
        }
    }
}

/// Type classification of a Cartan datum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CartanKind {
    /// Positive definite Cartan matrix.
    Finite,
    /// Positive semidefinite of corank one.
    Affine,
    /// Any other generalized Cartan matrix.
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Label {
    Finite(CartanFamily, usize),
    Affine(CartanFamily, usize),
    Matrix(usize),
}

/// A Cartan type with its matrix and weight lattice.
///
/// # Example
///
/// ```
/// use nakajima_cartan::{CartanDatum, CartanFamily, CartanType};
///
/// let b3 = CartanType::finite(CartanFamily::B, 3).unwrap();
/// assert_eq!(b3.index_set(), &[1, 2, 3]);
/// assert_eq!(b3.to_string(), "['B', 3]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CartanType {
    label: Label,
    index_set: Vec<usize>,
    matrix: IntegerMatrix,
    lattice: WeightLattice,
}

impl CartanType {
    fn assemble(label: Label, index_set: Vec<usize>, matrix: IntegerMatrix) -> Result<Self, CartanError> {
        let lattice = WeightLattice::new(index_set.clone(), matrix.clone())?;
        Ok(Self {
            label,
            index_set,
            matrix,
            lattice,
        })
    }

    /// Creates the finite type `family_rank`, labeled `1..=rank`.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::InvalidRank`] if the family has no member of
    /// that rank.
    pub fn finite(family: CartanFamily, rank: usize) -> Result<Self, CartanError> {
        if !family.admits_rank(rank) {
            return Err(CartanError::InvalidRank {
                family: family.letter(),
                rank,
            });
        }
        let matrix = finite_matrix(family, rank);
        Self::assemble(Label::Finite(family, rank), (1..=rank).collect(), matrix)
    }

    /// Creates the untwisted affine type `family_rank^(1)`, labeled
    /// `0..=rank`.
    ///
    /// Only type `A` is provided.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::InvalidRank`] for rank zero and
    /// [`CartanError::UnknownType`] for other families.
    pub fn affine(family: CartanFamily, rank: usize) -> Result<Self, CartanError> {
        if family != CartanFamily::A {
            return Err(CartanError::UnknownType(format!("{}{rank}^(1)", family.letter())));
        }
        if rank == 0 {
            return Err(CartanError::InvalidRank {
                family: family.letter(),
                rank,
            });
        }
        let size = rank + 1;
        let matrix = IntegerMatrix::square_from_fn(size, |p, q| {
            if p == q {
                2
            } else if size == 2 {
                -2
            } else if (p + 1) % size == q || (q + 1) % size == p {
                -1
            } else {
                0
            }
        });
        Self::assemble(Label::Affine(family, rank), (0..=rank).collect(), matrix)
    }

    /// Wraps a generalized Cartan matrix, labeled `0..n` by row.
    ///
    /// The result is classified as [`CartanKind::Other`] whatever its
    /// actual type.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, has a diagonal entry
    /// other than 2, a positive off-diagonal entry, or a zero entry whose
    /// transpose is nonzero.
    pub fn from_matrix(matrix: IntegerMatrix) -> Result<Self, CartanError> {
        if !matrix.is_square() {
            return Err(CartanError::NotSquare {
                rows: matrix.num_rows(),
                cols: matrix.num_cols(),
            });
        }
        let n = matrix.num_rows();
        let two = Integer::new(2);
        for i in 0..n {
            if matrix[(i, i)] != two {
                return Err(CartanError::DiagonalNotTwo { index: i });
            }
            for j in 0..n {
                if i == j {
                    continue;
                }
                if matrix[(i, j)].is_positive() {
                    return Err(CartanError::PositiveOffDiagonal { row: i, col: j });
                }
                if matrix[(i, j)].is_zero() != matrix[(j, i)].is_zero() {
                    return Err(CartanError::AsymmetricZero { row: i, col: j });
                }
            }
        }
        Self::assemble(Label::Matrix(n), (0..n).collect(), matrix)
    }

    /// Returns the family, or `None` for a bare matrix.
    #[must_use]
    pub fn family(&self) -> Option<CartanFamily> {
        match self.label {
            Label::Finite(family, _) | Label::Affine(family, _) => Some(family),
            Label::Matrix(_) => None,
        }
    }
}

fn finite_matrix(family: CartanFamily, n: usize) -> IntegerMatrix {
    // Dynkin edges on 1-based labels
    let edges: Vec<(usize, usize)> = match family {
        CartanFamily::A | CartanFamily::B | CartanFamily::C | CartanFamily::F | CartanFamily::G => {
            (1..n).map(|k| (k, k + 1)).collect()
        }
        CartanFamily::D => (1..n - 1)
            .map(|k| (k, k + 1))
            .chain(std::iter::once((n - 2, n)))
            .collect(),
        CartanFamily::E => [(1, 3), (3, 4), (2, 4), (4, 5), (5, 6), (6, 7), (7, 8)]
            .into_iter()
            .filter(|&(_, b)| b <= n)
            .collect(),
    };
    // (row, col, value) overrides for the multiple bond
    let multiple: Option<(usize, usize, i64)> = match family {
        CartanFamily::B => Some((n, n - 1, -2)),
        CartanFamily::C => Some((n - 1, n, -2)),
        CartanFamily::F => Some((3, 2, -2)),
        CartanFamily::G => Some((2, 1, -3)),
        _ => None,
    };
    IntegerMatrix::square_from_fn(n, |p, q| {
        let (i, j) = (p + 1, q + 1);
        if i == j {
            return 2;
        }
        if let Some((row, col, value)) = multiple {
            if (i, j) == (row, col) {
                return value;
            }
        }
        if edges.contains(&(i, j)) || edges.contains(&(j, i)) {
            -1
        } else {
            0
        }
    })
}

impl CartanDatum for CartanType {
    fn index_set(&self) -> &[usize] {
        &self.index_set
    }

    fn cartan_matrix(&self) -> &IntegerMatrix {
        &self.matrix
    }

    fn is_finite(&self) -> bool {
        matches!(self.label, Label::Finite(..))
    }

    fn is_affine(&self) -> bool {
        matches!(self.label, Label::Affine(..))
    }

    fn weight_lattice_realization(&self) -> &WeightLattice {
        &self.lattice
    }
}

impl fmt::Display for CartanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Label::Finite(family, rank) => write!(f, "['{}', {rank}]", family.letter()),
            Label::Affine(family, rank) => write!(f, "['{}', {rank}, 1]", family.letter()),
            Label::Matrix(rank) => write!(f, "Dynkin diagram of rank {rank}"),
        }
    }
}

/// Parses `"B4"`, `"E8"`, and affine names `"A2^(1)"` or `"A2~"`.
impl FromStr for CartanType {
    type Err = CartanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CartanError::UnknownType(s.to_string());
        let trimmed = s.trim();
        let (body, affine) = if let Some(body) = trimmed.strip_suffix("^(1)") {
            (body, true)
        } else if let Some(body) = trimmed.strip_suffix('~') {
            (body, true)
        } else {
            (trimmed, false)
        };
        let mut chars = body.chars();
        let family = chars
            .next()
            .and_then(CartanFamily::from_letter)
            .ok_or_else(unknown)?;
        let rank: usize = chars.as_str().parse().map_err(|_| unknown())?;
        if affine {
            Self::affine(family, rank)
        } else {
            Self::finite(family, rank)
        }
    }
}
