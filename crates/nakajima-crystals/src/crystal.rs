//! The interface shared by monomial crystal containers.

use std::fmt;
use std::sync::Arc;

use nakajima_cartan::{CartanDatum, Weight};
use nakajima_integers::Integer;
use rayon::prelude::*;

use crate::algebra::MonomialAlgebra;
use crate::commutation::CommutationMatrix;
use crate::error::CrystalError;
use crate::exponents::Key;
use crate::monomial::{Flavor, Monomial};

/// Whether a crystal has finitely many elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Finitely many elements.
    Finite,
    /// Infinitely many elements.
    Infinite,
}

/// One-step neighbours of a monomial, one entry per index.
pub type Neighbours = Vec<(usize, Option<Monomial>)>;

/// A crystal whose elements are modified Nakajima monomials.
///
/// Implementors fix the Cartan datum, the commutation matrix and the
/// flavor, and decide when `f_i` has an edge. Everything else is derived
/// from [`MonomialAlgebra`].
pub trait Crystal: fmt::Display {
    /// The Cartan datum the crystal is built on.
    type Datum: CartanDatum;

    /// Returns the Cartan datum.
    fn datum(&self) -> &Arc<Self::Datum>;

    /// Returns the commutation matrix.
    fn c(&self) -> &CommutationMatrix;

    /// Variables the elements are written in.
    fn flavor(&self) -> Flavor;

    /// The generators of the crystal.
    fn module_generators(&self) -> &[Monomial];

    /// Whether the crystal is finite.
    fn cardinality(&self) -> Cardinality;

    /// Rank at which [`raise_all`](Self::raise_all) and
    /// [`lower_all`](Self::lower_all) switch to parallel evaluation.
    fn parallel_threshold(&self) -> usize;

    /// Applies `f_i`; `Ok(None)` when there is no edge.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn f(&self, monomial: &Monomial, index: usize) -> Result<Option<Monomial>, CrystalError>;

    /// The operators bound to this crystal's datum and commutation matrix.
    fn algebra(&self) -> MonomialAlgebra<'_, Self::Datum> {
        MonomialAlgebra::new(self.datum().as_ref(), self.c())
    }

    /// The index set of the datum.
    fn index_set(&self) -> &[usize] {
        self.datum().index_set()
    }

    /// Applies `e_i`; `Ok(None)` when there is no edge.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn e(&self, monomial: &Monomial, index: usize) -> Result<Option<Monomial>, CrystalError> {
        self.algebra().e(monomial, index)
    }

    /// Weight of an element.
    ///
    /// # Errors
    ///
    /// Fails if the monomial mentions an index outside the index set.
    fn weight(&self, monomial: &Monomial) -> Result<Weight, CrystalError> {
        self.algebra().weight(monomial)
    }

    /// `phi_i` of an element.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn phi(&self, monomial: &Monomial, index: usize) -> Result<Integer, CrystalError> {
        self.algebra().phi(monomial, index)
    }

    /// `epsilon_i` of an element.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn epsilon(&self, monomial: &Monomial, index: usize) -> Result<Integer, CrystalError> {
        self.algebra().epsilon(monomial, index)
    }

    /// Builds a monomial of this crystal's flavor from `{(i, k): exponent}`
    /// entries.
    ///
    /// # Errors
    ///
    /// Fails on a negative level or an index outside the index set.
    fn monomial<I, E>(&self, entries: I) -> Result<Monomial, CrystalError>
    where
        I: IntoIterator<Item = (Key, E)>,
        E: Into<Integer>,
        Self: Sized,
    {
        let monomial = Monomial::from_map(self.flavor(), entries)?;
        let datum = self.datum();
        if let Some(stray) = monomial.indices().into_iter().find(|&i| !datum.contains(i)) {
            return Err(CrystalError::IndexNotInIndexSet(stray));
        }
        Ok(monomial)
    }

    /// Applies `e_{i_1}`, then `e_{i_2}`, and so on, stopping at the first
    /// missing edge.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn e_string(&self, monomial: &Monomial, indices: &[usize]) -> Result<Option<Monomial>, CrystalError> {
        let mut current = monomial.clone();
        for &i in indices {
            match self.e(&current, i)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Applies `f_{i_1}`, then `f_{i_2}`, and so on, stopping at the first
    /// missing edge.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::IndexNotInIndexSet`] for an unknown index.
    fn f_string(&self, monomial: &Monomial, indices: &[usize]) -> Result<Option<Monomial>, CrystalError> {
        let mut current = monomial.clone();
        for &i in indices {
            match self.f(&current, i)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// `e_i(M)` for every index `i`, in index-set order.
    ///
    /// # Errors
    ///
    /// Fails if the monomial mentions an index outside the index set.
    fn raise_all(&self, monomial: &Monomial) -> Result<Neighbours, CrystalError>
    where
        Self: Sync,
    {
        neighbours(self.index_set(), self.parallel_threshold(), |i| self.e(monomial, i))
    }

    /// `f_i(M)` for every index `i`, in index-set order.
    ///
    /// # Errors
    ///
    /// Fails if the monomial mentions an index outside the index set.
    fn lower_all(&self, monomial: &Monomial) -> Result<Neighbours, CrystalError>
    where
        Self: Sync,
    {
        neighbours(self.index_set(), self.parallel_threshold(), |i| self.f(monomial, i))
    }
}

fn neighbours<F>(indices: &[usize], threshold: usize, op: F) -> Result<Neighbours, CrystalError>
where
    F: Fn(usize) -> Result<Option<Monomial>, CrystalError> + Sync,
{
    if indices.len() < threshold {
        return indices.iter().map(|&i| op(i).map(|m| (i, m))).collect();
    }
    indices.par_iter().map(|&i| op(i).map(|m| (i, m))).collect()
}
