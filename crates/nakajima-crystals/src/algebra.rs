//! Crystal operators on Y- and A-monomials.
//!
//! For a Y-monomial `M` and index `i`:
//!
//! ```text
//! wt(M)     = sum_i (sum_k y_i(k)) Lambda_i
//! phi_i(M)  = max_k sum_{j <= k} y_i(j)
//! eps_i(M)  = phi_i(M) - <h_i, wt(M)>
//! e_i M     = A_{i,k_e} M        (no edge if eps_i(M) = 0)
//! f_i M     = A_{i,k_f}^{-1} M
//! ```
//!
//! with `A_{i,k} = Y_{i,k} Y_{i,k+1} prod_{j != i} Y_{j,k+c_ji}^{a_ji}`.
//! A-monomials are evaluated through their Y form and then moved by a single
//! `A_{i,k}` exponent.
//!
//! Column convention: for finite types the Cartan and commutation matrices
//! are read at column `i - 1`, for all other types at column `i`.

use log::trace;
use nakajima_cartan::{CartanDatum, Weight};
use nakajima_integers::Integer;
use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::commutation::CommutationMatrix;
use crate::error::CrystalError;
use crate::exponents::{ExponentMap, Key, Level};
use crate::monomial::{Flavor, Monomial};
use crate::partial_sums::scan;

/// Exponent deltas of a power of `A_{i,k}`.
pub type Factor = SmallVec<[(Key, Integer); 8]>;

/// The crystal operators for a fixed Cartan datum and commutation matrix.
#[derive(Debug)]
pub struct MonomialAlgebra<'a, D: ?Sized> {
    datum: &'a D,
    commutation: &'a CommutationMatrix,
}

impl<D: ?Sized> Clone for MonomialAlgebra<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for MonomialAlgebra<'_, D> {}

impl<'a, D: CartanDatum + ?Sized> MonomialAlgebra<'a, D> {
    /// Binds the operators to a datum and commutation matrix.
    #[must_use]
    pub fn new(datum: &'a D, commutation: &'a CommutationMatrix) -> Self {
        Self { datum, commutation }
    }

    /// Returns the Cartan datum.
    #[must_use]
    pub fn datum(&self) -> &'a D {
        self.datum
    }

    /// Returns the commutation matrix.
    #[must_use]
    pub fn commutation(&self) -> &'a CommutationMatrix {
        self.commutation
    }

    fn check_index(&self, index: usize) -> Result<(), CrystalError> {
        if self.datum.contains(index) {
            Ok(())
        } else {
            Err(CrystalError::IndexNotInIndexSet(index))
        }
    }

    /// The matrix column read for crystal index `index`.
    fn column(&self, index: usize) -> Result<usize, CrystalError> {
        let column = if self.datum.is_finite() {
            index.checked_sub(1)
        } else {
            Some(index)
        };
        column
            .filter(|&c| c < self.datum.rank())
            .ok_or(CrystalError::ColumnOutOfRange { index })
    }

    /// Exponent deltas of `A_{index,level}^power`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not in the index set or a shifted
    /// level overflows.
    pub fn a_factor(&self, index: usize, level: Level, power: &Integer) -> Result<Factor, CrystalError> {
        self.check_index(index)?;
        let col = self.column(index)?;
        let overflow = || CrystalError::LevelOverflow { index };
        let cartan = self.datum.cartan_matrix();

        let mut factor: Factor = smallvec![
            ((index, level), power.clone()),
            ((index, level.checked_add(1).ok_or_else(overflow)?), power.clone()),
        ];
        for (row, &j) in self.datum.index_set().iter().enumerate() {
            if j == index {
                continue;
            }
            let a = cartan.get(row, col).ok_or(CrystalError::ColumnOutOfRange { index })?;
            if a.is_zero() {
                continue;
            }
            let shift = self
                .commutation
                .get(row, col)
                .ok_or(CrystalError::ColumnOutOfRange { index })?
                .to_i64()
                .ok_or_else(overflow)?;
            let shifted = level.checked_add(shift).ok_or_else(overflow)?;
            factor.push(((j, shifted), a * power));
        }
        Ok(factor)
    }

    /// Rewrites a monomial in Y variables; Y-monomials are returned as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the monomial mentions an index outside the
    /// index set.
    pub fn to_y(&self, monomial: &Monomial) -> Result<Monomial, CrystalError> {
        if monomial.flavor() == Flavor::Y {
            return Ok(monomial.clone());
        }
        let mut y = ExponentMap::new();
        for (&(i, k), a) in monomial.exponents().iter() {
            for (key, delta) in self.a_factor(i, k, a)? {
                y.accumulate(key, &delta);
            }
        }
        Ok(Monomial::from_exponents(Flavor::Y, y))
    }

    fn y_weight(&self, y: &ExponentMap) -> Result<Weight, CrystalError> {
        let lambda = self.datum.weight_lattice_realization().fundamental_weights();
        let mut weight = Weight::zero();
        for (&(i, _), e) in y.iter() {
            let la = lambda.get(&i).ok_or(CrystalError::IndexNotInIndexSet(i))?;
            weight = weight + la.scale(e);
        }
        Ok(weight)
    }

    fn y_epsilon(&self, y: &ExponentMap, index: usize) -> Result<Integer, CrystalError> {
        let lattice = self.datum.weight_lattice_realization();
        let h = lattice
            .simple_coroot(index)
            .ok_or(CrystalError::IndexNotInIndexSet(index))?;
        let phi = scan(y, index).map_or_else(Integer::zero, |s| s.phi);
        Ok(phi - lattice.pairing(h, &self.y_weight(y)?))
    }

    fn y_k_e(&self, y: &ExponentMap, index: usize) -> Result<Option<Level>, CrystalError> {
        if self.y_epsilon(y, index)?.is_zero() {
            return Ok(None);
        }
        Ok(Some(scan(y, index).map_or(0, |s| s.last_max)))
    }

    /// `wt(M) = sum_i (sum_k y_i(k)) Lambda_i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the monomial mentions an index outside the
    /// index set.
    pub fn weight(&self, monomial: &Monomial) -> Result<Weight, CrystalError> {
        let y = self.to_y(monomial)?;
        self.y_weight(y.exponents())
    }

    /// `phi_i(M)`; zero when `M` has no `Y_{i,k}` factor.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn phi(&self, monomial: &Monomial, index: usize) -> Result<Integer, CrystalError> {
        self.check_index(index)?;
        let y = self.to_y(monomial)?;
        Ok(scan(y.exponents(), index).map_or_else(Integer::zero, |s| s.phi))
    }

    /// `epsilon_i(M) = phi_i(M) - <h_i, wt(M)>`.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn epsilon(&self, monomial: &Monomial, index: usize) -> Result<Integer, CrystalError> {
        self.check_index(index)?;
        let y = self.to_y(monomial)?;
        self.y_epsilon(y.exponents(), index)
    }

    /// `k_f`: the smallest level attaining `phi_i`.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn k_f(&self, monomial: &Monomial, index: usize) -> Result<Level, CrystalError> {
        self.check_index(index)?;
        let y = self.to_y(monomial)?;
        Ok(scan(y.exponents(), index).map_or(0, |s| s.first_max))
    }

    /// `k_e`: the largest level attaining `phi_i`, or `None` when
    /// `epsilon_i(M) = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn k_e(&self, monomial: &Monomial, index: usize) -> Result<Option<Level>, CrystalError> {
        self.check_index(index)?;
        let y = self.to_y(monomial)?;
        self.y_k_e(y.exponents(), index)
    }

    /// Applies `e_i`; `Ok(None)` when there is no edge.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn e(&self, monomial: &Monomial, index: usize) -> Result<Option<Monomial>, CrystalError> {
        self.check_index(index)?;
        let y = self.to_y(monomial)?;
        let Some(k_e) = self.y_k_e(y.exponents(), index)? else {
            trace!("e_{index}({monomial}) = None");
            return Ok(None);
        };
        let result = self.shift(monomial, index, k_e, &Integer::one())?;
        trace!("e_{index}({monomial}) = {result}");
        Ok(Some(result))
    }

    /// Applies `f_i`, which is total on the full monomial set.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    pub fn f(&self, monomial: &Monomial, index: usize) -> Result<Monomial, CrystalError> {
        let k_f = self.k_f(monomial, index)?;
        let result = self.shift(monomial, index, k_f, &-Integer::one())?;
        trace!("f_{index}({monomial}) = {result}");
        Ok(result)
    }

    /// Multiplies by `A_{index,level}^power` in the monomial's own flavor.
    fn shift(&self, monomial: &Monomial, index: usize, level: Level, power: &Integer) -> Result<Monomial, CrystalError> {
        let exponents = match monomial.flavor() {
            Flavor::Y => monomial
                .exponents()
                .multiplied(&self.a_factor(index, level, power)?),
            Flavor::A => monomial
                .exponents()
                .multiplied(&[((index, level), power.clone())]),
        };
        Ok(Monomial::from_exponents(monomial.flavor(), exponents))
    }
}
