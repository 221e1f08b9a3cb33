//! The crystal `B(infinity)` realized by modified Nakajima monomials.

use std::fmt;
use std::sync::Arc;

use log::debug;
use nakajima_cartan::CartanDatum;

use crate::commutation::CommutationMatrix;
use crate::config::CrystalConfig;
use crate::crystal::{Cardinality, Crystal};
use crate::error::{CommutationError, CrystalError};
use crate::monomial::{Flavor, Monomial};

/// `B(infinity)`, generated by the identity monomial.
///
/// `f_i` is total: every element has an `f_i`-successor for every `i`.
#[derive(Debug)]
pub struct InfinityCrystal<D> {
    datum: Arc<D>,
    commutation: CommutationMatrix,
    flavor: Flavor,
    generators: [Monomial; 1],
    parallel_threshold: usize,
}

impl<D: CartanDatum> InfinityCrystal<D> {
    /// Builds the crystal with an optional commutation matrix.
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::Commutation`] if the matrix does not match
    /// the rank of the datum.
    pub fn new(datum: Arc<D>, commutation: Option<CommutationMatrix>, flavor: Flavor) -> Result<Self, CrystalError> {
        let config = CrystalConfig {
            flavor,
            commutation,
            ..CrystalConfig::default()
        };
        Self::with_config(datum, config)
    }

    /// Builds the crystal from a [`CrystalConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CrystalError::Commutation`] if the matrix does not match
    /// the rank of the datum.
    pub fn with_config(datum: Arc<D>, config: CrystalConfig) -> Result<Self, CrystalError> {
        let commutation = resolve_commutation(datum.rank(), config.commutation)?;
        debug!("infinity crystal of type {datum} with {:?}-monomials", config.flavor);
        Ok(Self {
            generators: [Monomial::identity(config.flavor)],
            datum,
            commutation,
            flavor: config.flavor,
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// The unique highest weight element, the identity monomial.
    #[must_use]
    pub fn highest_weight_vector(&self) -> &Monomial {
        &self.generators[0]
    }
}

/// Uses the standard matrix when none is given, otherwise checks the size.
pub(crate) fn resolve_commutation(
    rank: usize,
    commutation: Option<CommutationMatrix>,
) -> Result<CommutationMatrix, CommutationError> {
    match commutation {
        None => Ok(CommutationMatrix::standard(rank)),
        Some(c) if c.rank() == rank => Ok(c),
        Some(c) => {
            debug!("rejected c matrix of size {} for rank {rank}", c.rank());
            Err(CommutationError::Dimension {
                expected: rank,
                rows: c.as_matrix().num_rows(),
                cols: c.as_matrix().num_cols(),
            })
        }
    }
}

impl<D: CartanDatum> Crystal for InfinityCrystal<D> {
    type Datum = D;

    fn datum(&self) -> &Arc<D> {
        &self.datum
    }

    fn c(&self) -> &CommutationMatrix {
        &self.commutation
    }

    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn module_generators(&self) -> &[Monomial] {
        &self.generators
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::Infinite
    }

    fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    fn f(&self, monomial: &Monomial, index: usize) -> Result<Option<Monomial>, CrystalError> {
        self.algebra().f(monomial, index).map(Some)
    }
}

impl<D: CartanDatum> fmt::Display for InfinityCrystal<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infinity crystal of modified Nakajima monomials of type {}", self.datum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nakajima_cartan::{CartanFamily, CartanType, Weight};

    fn crystal(family: CartanFamily, rank: usize, flavor: Flavor) -> InfinityCrystal<CartanType> {
        let ct = Arc::new(CartanType::finite(family, rank).unwrap());
        InfinityCrystal::new(ct, None, flavor).unwrap()
    }

    #[test]
    fn test_display_and_accessors() {
        let b = crystal(CartanFamily::B, 3, Flavor::Y);
        assert_eq!(
            b.to_string(),
            "Infinity crystal of modified Nakajima monomials of type ['B', 3]"
        );
        assert_eq!(b.cardinality(), Cardinality::Infinite);
        assert_eq!(b.c(), &CommutationMatrix::standard(3));
        assert_eq!(b.module_generators().len(), 1);
        assert!(b.highest_weight_vector().is_identity());
        assert_eq!(b.index_set(), &[1, 2, 3]);
    }

    #[test]
    fn test_wrong_commutation_size() {
        let ct = Arc::new(CartanType::finite(CartanFamily::A, 2).unwrap());
        let err = InfinityCrystal::new(ct, Some(CommutationMatrix::standard(3)), Flavor::Y).unwrap_err();
        assert_eq!(
            err,
            CrystalError::Commutation(CommutationError::Dimension {
                expected: 2,
                rows: 3,
                cols: 3
            })
        );
    }

    #[test]
    fn test_c5_raising() {
        let c5 = crystal(CartanFamily::C, 5, Flavor::Y);
        let one = c5.highest_weight_vector().clone();
        let m = c5.f_string(&one, &[1, 3]).unwrap().unwrap();

        let e1 = c5.e(&m, 1).unwrap().unwrap();
        assert_eq!(e1.to_string(), "Y(2,1) Y(3,0)^-1 Y(3,1)^-1 Y(4,0)");
        assert_eq!(c5.e(&m, 2).unwrap(), None);
        let e3 = c5.e(&m, 3).unwrap().unwrap();
        assert_eq!(e3.to_string(), "Y(1,0)^-1 Y(1,1)^-1 Y(2,0)");
        assert_eq!(c5.e(&m, 4).unwrap(), None);
        assert_eq!(c5.e(&m, 5).unwrap(), None);
    }

    #[test]
    fn test_b4_lowering() {
        let b4 = crystal(CartanFamily::B, 4, Flavor::Y);
        let one = b4.highest_weight_vector().clone();
        let m = b4.f_string(&one, &[1, 3, 4]).unwrap().unwrap();

        let expected = [
            "Y(1,0)^-2 Y(1,1)^-2 Y(2,0)^2 Y(2,1) Y(3,0)^-1 Y(4,0) Y(4,1)^-1",
            "Y(1,0)^-1 Y(1,1)^-1 Y(1,2) Y(2,0) Y(2,2)^-1 Y(3,0)^-1 Y(3,1) Y(4,0) Y(4,1)^-1",
            "Y(1,0)^-1 Y(1,1)^-1 Y(2,0) Y(2,1)^2 Y(3,0)^-2 Y(3,1)^-1 Y(4,0)^3 Y(4,1)^-1",
            "Y(1,0)^-1 Y(1,1)^-1 Y(2,0) Y(2,1) Y(3,0)^-1 Y(3,1) Y(4,1)^-2",
        ];
        let lowered = b4.lower_all(&m).unwrap();
        for ((i, next), text) in lowered.into_iter().zip(expected) {
            assert_eq!(next.unwrap().to_string(), text, "f_{i}");
        }
    }

    #[test]
    fn test_a_flavor_affine() {
        let ct = Arc::new(CartanType::affine(CartanFamily::A, 2).unwrap());
        let inf = InfinityCrystal::new(ct, None, Flavor::A).unwrap();
        let one = inf.highest_weight_vector().clone();
        let m = inf.f_string(&one, &[2, 0, 1, 2, 1]).unwrap().unwrap();
        assert_eq!(m.to_string(), "A(0,1)^-1 A(1,1)^-2 A(2,0)^-1 A(2,1)^-1");
        assert_eq!(
            inf.algebra().to_y(&m).unwrap().to_string(),
            "Y(0,2)^2 Y(1,2)^-1 Y(2,0)^-1 Y(2,1) Y(2,2)^-1"
        );
        assert_eq!(
            inf.weight(&m).unwrap(),
            Weight::from_coefficients([(0, 2), (1, -1), (2, -1)])
        );
    }

    #[test]
    fn test_monomial_validation() {
        let a2 = crystal(CartanFamily::A, 2, Flavor::Y);
        let m = a2.monomial([((1, 0), 1), ((2, 3), -1)]).unwrap();
        assert_eq!(m.to_string(), "Y(1,0) Y(2,3)^-1");
        assert_eq!(
            a2.monomial([((0, 0), 1)]).unwrap_err(),
            CrystalError::IndexNotInIndexSet(0)
        );
        assert_eq!(
            a2.monomial([((1, -2), 1)]).unwrap_err(),
            CrystalError::NegativeLevel { index: 1, level: -2 }
        );
    }

    #[test]
    fn test_e_string_stops_at_missing_edge() {
        let a2 = crystal(CartanFamily::A, 2, Flavor::Y);
        let one = a2.highest_weight_vector().clone();
        let m = a2.f_string(&one, &[1, 2]).unwrap().unwrap();
        assert_eq!(a2.e_string(&m, &[2, 1]).unwrap(), Some(one.clone()));
        assert_eq!(a2.e_string(&m, &[2, 1, 1]).unwrap(), None);
    }
}
