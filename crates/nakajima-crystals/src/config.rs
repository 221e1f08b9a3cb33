//! Construction options for crystal containers.

use crate::commutation::CommutationMatrix;
use crate::monomial::Flavor;

/// Options shared by the crystal containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrystalConfig {
    /// Variables the elements are written in.
    pub flavor: Flavor,
    /// Commutation matrix; the standard choice when `None`.
    pub commutation: Option<CommutationMatrix>,
    /// Minimum rank before one-step neighbourhoods are computed in parallel.
    pub parallel_threshold: usize,
}

impl Default for CrystalConfig {
    fn default() -> Self {
        Self {
            flavor: Flavor::Y,
            commutation: None,
            parallel_threshold: 8,
        }
    }
}

impl CrystalConfig {
    /// Sets the flavor.
    #[must_use]
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// Sets an explicit commutation matrix.
    #[must_use]
    pub fn with_commutation(mut self, commutation: CommutationMatrix) -> Self {
        self.commutation = Some(commutation);
        self
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
