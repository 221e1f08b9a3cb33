//! The highest weight crystal `B(Lambda)` inside the monomial crystal.
//!
//! `B(Lambda)` is the connected component of `Y_Lambda = prod_i Y_{i,0}^{lambda_i}`
//! for a dominant weight `Lambda = sum_i lambda_i Lambda_i`. Raising is the
//! same as in `B(infinity)`; lowering stops once `phi_i` reaches zero.

use std::fmt;
use std::sync::Arc;

use log::debug;
use nakajima_cartan::{CartanDatum, TypedWeight, Weight};
use num_traits::Zero;

use crate::commutation::CommutationMatrix;
use crate::config::CrystalConfig;
use crate::crystal::{Cardinality, Crystal};
use crate::error::CrystalError;
use crate::infinity::resolve_commutation;
use crate::monomial::{Flavor, Monomial};

/// `B(Lambda)` realized by Y-monomials.
#[derive(Debug)]
pub struct HighestWeightCrystal<D> {
    datum: Arc<D>,
    highest_weight: Weight,
    commutation: CommutationMatrix,
    generators: [Monomial; 1],
    parallel_threshold: usize,
}

impl<D: CartanDatum> HighestWeightCrystal<D> {
    /// Builds `B(Lambda)` with an optional commutation matrix.
    ///
    /// # Errors
    ///
    /// Fails if `highest_weight` uses an index outside the index set, is not
    /// dominant, or the commutation matrix does not match the rank.
    pub fn new(
        datum: Arc<D>,
        highest_weight: Weight,
        commutation: Option<CommutationMatrix>,
    ) -> Result<Self, CrystalError> {
        let config = CrystalConfig {
            commutation,
            ..CrystalConfig::default()
        };
        Self::with_config(datum, highest_weight, config)
    }

    /// Builds `B(Lambda)` from a weight that carries its own datum.
    ///
    /// # Errors
    ///
    /// Same as [`HighestWeightCrystal::new`].
    pub fn from_typed_weight(
        weight: TypedWeight<D>,
        commutation: Option<CommutationMatrix>,
    ) -> Result<Self, CrystalError> {
        let (datum, weight) = weight.into_parts();
        Self::new(datum, weight, commutation)
    }

    /// Builds `B(Lambda)` from a [`CrystalConfig`].
    ///
    /// # Errors
    ///
    /// Same as [`HighestWeightCrystal::new`], and
    /// [`CrystalError::UnsupportedFlavor`] for A-monomials.
    pub fn with_config(datum: Arc<D>, highest_weight: Weight, config: CrystalConfig) -> Result<Self, CrystalError> {
        if config.flavor != Flavor::Y {
            return Err(CrystalError::UnsupportedFlavor);
        }
        if let Some(stray) = highest_weight.support().find(|&i| !datum.contains(i)) {
            return Err(CrystalError::IndexNotInIndexSet(stray));
        }
        if !highest_weight.is_dominant() {
            debug!("rejected highest weight {highest_weight}: not dominant");
            return Err(CrystalError::NotDominant(highest_weight));
        }
        let commutation = resolve_commutation(datum.rank(), config.commutation)?;

        let generator = Monomial::from_map(
            Flavor::Y,
            highest_weight.terms().map(|(i, c)| ((i, 0), c.clone())),
        )?;
        debug!("highest weight crystal of type {datum} and weight {highest_weight}, generator {generator}");
        Ok(Self {
            datum,
            highest_weight,
            commutation,
            generators: [generator],
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// The highest weight `Lambda`.
    #[must_use]
    pub fn highest_weight(&self) -> &Weight {
        &self.highest_weight
    }

    /// The generator `Y_Lambda`.
    #[must_use]
    pub fn highest_weight_vector(&self) -> &Monomial {
        &self.generators[0]
    }
}

impl<D: CartanDatum> Crystal for HighestWeightCrystal<D> {
    type Datum = D;

    fn datum(&self) -> &Arc<D> {
        &self.datum
    }

    fn c(&self) -> &CommutationMatrix {
        &self.commutation
    }

    fn flavor(&self) -> Flavor {
        Flavor::Y
    }

    fn module_generators(&self) -> &[Monomial] {
        &self.generators
    }

    fn cardinality(&self) -> Cardinality {
        if self.datum.is_finite() {
            Cardinality::Finite
        } else {
            Cardinality::Infinite
        }
    }

    fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn f(&self, monomial: &Monomial, index: usize) -> Result<Option<Monomial>, CrystalError> {
        let algebra = self.algebra();
        if algebra.phi(monomial, index)?.is_zero() {
            return Ok(None);
        }
        algebra.f(monomial, index).map(Some)
    }
}

impl<D: CartanDatum> fmt::Display for HighestWeightCrystal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Highest weight crystal of modified Nakajima monomials of Cartan type {} and highest weight {}",
            self.datum, self.highest_weight
        )
    }
}
