//! Construct-once cache of crystal containers.
//!
//! Two requests with equal datum, commutation matrix and flavor (or highest
//! weight) return the same shared container. Omitting the commutation matrix
//! is the same request as passing the standard one.

use std::hash::Hash;
use std::sync::Arc;

use log::trace;
use nakajima_cartan::{CartanDatum, Weight};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::commutation::CommutationMatrix;
use crate::error::CrystalError;
use crate::highest_weight::HighestWeightCrystal;
use crate::infinity::{resolve_commutation, InfinityCrystal};
use crate::monomial::Flavor;

type InfinityKey<D> = (Arc<D>, CommutationMatrix, Flavor);
type HighestWeightKey<D> = (Arc<D>, CommutationMatrix, Weight);

/// Shared containers indexed by their construction arguments.
pub struct CrystalRegistry<D> {
    infinity: RwLock<FxHashMap<InfinityKey<D>, Arc<InfinityCrystal<D>>>>,
    highest_weight: RwLock<FxHashMap<HighestWeightKey<D>, Arc<HighestWeightCrystal<D>>>>,
}

impl<D: CartanDatum + Hash + Eq> CrystalRegistry<D> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            infinity: RwLock::new(FxHashMap::default()),
            highest_weight: RwLock::new(FxHashMap::default()),
        }
    }

    /// Returns the shared `B(infinity)` for these arguments, building it on
    /// first request.
    ///
    /// # Errors
    ///
    /// Same as [`InfinityCrystal::new`]. Failed constructions are not cached.
    pub fn infinity(
        &self,
        datum: Arc<D>,
        commutation: Option<CommutationMatrix>,
        flavor: Flavor,
    ) -> Result<Arc<InfinityCrystal<D>>, CrystalError> {
        let commutation = resolve_commutation(datum.rank(), commutation)?;
        let key = (datum, commutation, flavor);
        if let Some(crystal) = self.infinity.read().get(&key) {
            trace!("registry hit for infinity crystal of type {}", key.0);
            return Ok(crystal.clone());
        }

        let (datum, commutation, flavor) = key;
        let crystal = Arc::new(InfinityCrystal::new(datum.clone(), Some(commutation.clone()), flavor)?);
        let mut map = self.infinity.write();
        Ok(map.entry((datum, commutation, flavor)).or_insert(crystal).clone())
    }

    /// Returns the shared `B(Lambda)` for these arguments, building it on
    /// first request.
    ///
    /// # Errors
    ///
    /// Same as [`HighestWeightCrystal::new`]. Failed constructions are not
    /// cached.
    pub fn highest_weight(
        &self,
        datum: Arc<D>,
        highest_weight: Weight,
        commutation: Option<CommutationMatrix>,
    ) -> Result<Arc<HighestWeightCrystal<D>>, CrystalError> {
        let commutation = resolve_commutation(datum.rank(), commutation)?;
        let key = (datum, commutation, highest_weight);
        if let Some(crystal) = self.highest_weight.read().get(&key) {
            trace!("registry hit for highest weight crystal {crystal}");
            return Ok(crystal.clone());
        }

        let (datum, commutation, highest_weight) = key;
        let crystal = Arc::new(HighestWeightCrystal::new(
            datum.clone(),
            highest_weight.clone(),
            Some(commutation.clone()),
        )?);
        let mut map = self.highest_weight.write();
        Ok(map
            .entry((datum, commutation, highest_weight))
            .or_insert(crystal)
            .clone())
    }

    /// Number of cached containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.infinity.read().len() + self.highest_weight.read().len()
    }

    /// Returns true if nothing has been cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached container.
    pub fn clear(&self) {
        self.infinity.write().clear();
        self.highest_weight.write().clear();
    }
}

impl<D: CartanDatum + Hash + Eq> Default for CrystalRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
