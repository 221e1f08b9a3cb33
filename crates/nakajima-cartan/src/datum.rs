//! The Cartan datum contract.
//!
//! Crystal containers only ever see a Cartan datum through this trait. The
//! reference provider is [`crate::CartanType`]; callers with their own root
//! system data can implement the trait directly.

use std::fmt;
use std::sync::Arc;

use crate::cartan_type::CartanKind;
use crate::error::CartanError;
use crate::matrix::IntegerMatrix;
use crate::weight::{Weight, WeightLattice};

/// Index set, Cartan matrix, type classification and weight lattice of a
/// (generalized) root system.
///
/// Rows and columns of [`cartan_matrix`](Self::cartan_matrix) follow the
/// order of [`index_set`](Self::index_set).
pub trait CartanDatum: fmt::Debug + fmt::Display + Send + Sync {
    /// The ordered index set `I`.
    fn index_set(&self) -> &[usize];

    /// The Cartan matrix `(a_ij)`, indexed by positions in the index set.
    fn cartan_matrix(&self) -> &IntegerMatrix;

    /// Returns true for finite type.
    fn is_finite(&self) -> bool;

    /// Returns true for affine type.
    fn is_affine(&self) -> bool;

    /// The weight lattice realization.
    fn weight_lattice_realization(&self) -> &WeightLattice;

    /// Number of simple roots.
    fn rank(&self) -> usize {
        self.index_set().len()
    }

    /// Position of `index` in the index set.
    fn position(&self, index: usize) -> Option<usize> {
        self.index_set().iter().position(|&j| j == index)
    }

    /// Returns true if `index` belongs to the index set.
    fn contains(&self, index: usize) -> bool {
        self.position(index).is_some()
    }

    /// Type classification.
    fn kind(&self) -> CartanKind {
        if self.is_finite() {
            CartanKind::Finite
        } else if self.is_affine() {
            CartanKind::Affine
        } else {
            CartanKind::Other
        }
    }
}

/// A weight bundled with the Cartan datum whose lattice it lives in.
#[derive(Debug)]
pub struct TypedWeight<D> {
    datum: Arc<D>,
    weight: Weight,
}

impl<D: CartanDatum> TypedWeight<D> {
    /// Attaches `weight` to `datum`.
    ///
    /// # Errors
    ///
    /// Returns [`CartanError::IndexNotInIndexSet`] if the weight mentions an
    /// index the datum does not have.
    pub fn new(datum: Arc<D>, weight: Weight) -> Result<Self, CartanError> {
        if let Some(bad) = weight.support().find(|&i| !datum.contains(i)) {
            return Err(CartanError::IndexNotInIndexSet(bad));
        }
        Ok(Self { datum, weight })
    }

    /// Returns the datum.
    #[must_use]
    pub fn datum(&self) -> &Arc<D> {
        &self.datum
    }

    /// Returns the weight.
    #[must_use]
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    /// Splits into datum and weight.
    #[must_use]
    pub fn into_parts(self) -> (Arc<D>, Weight) {
        (self.datum, self.weight)
    }
}

impl<D> Clone for TypedWeight<D> {
    fn clone(&self) -> Self {
        Self {
            datum: Arc::clone(&self.datum),
            weight: self.weight.clone(),
        }
    }
}

impl<D> fmt::Display for TypedWeight<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight)
    }
}
