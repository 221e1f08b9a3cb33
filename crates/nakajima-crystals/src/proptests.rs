//! Property-based tests for the crystal axioms on random f-strings.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nakajima_cartan::{CartanDatum, CartanFamily, CartanType, Weight};
    use nakajima_integers::Integer;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{CommutationMatrix, Crystal, Flavor, HighestWeightCrystal, InfinityCrystal, Monomial};

    const TYPES: [&str; 5] = ["A2", "B2", "G2", "A3", "A2^(1)"];
    const FINITE_TYPES: [&str; 4] = ["A2", "B2", "G2", "A3"];

    fn cartan(name: &str) -> Arc<CartanType> {
        Arc::new(name.parse().unwrap())
    }

    // Positions into the index set, reduced modulo the rank at use
    fn positions() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(0usize..8, 0..8)
    }

    fn labels(ct: &CartanType, positions: &[usize]) -> Vec<usize> {
        let index_set = ct.index_set();
        positions.iter().map(|p| index_set[p % index_set.len()]).collect()
    }

    // One orientation per pair i < j; enough pairs for rank 3
    fn orientations() -> impl Strategy<Value = Vec<bool>> {
        prop::collection::vec(any::<bool>(), 3)
    }

    // c_ij = 1, c_ji = 0 when the pair keeps its orientation, swapped otherwise
    fn commutation(rank: usize, orientations: &[bool]) -> CommutationMatrix {
        let mut rows = vec![vec![0i64; rank]; rank];
        let mut pair = 0;
        for i in 0..rank {
            for j in i + 1..rank {
                let keep = orientations[pair % orientations.len()];
                rows[i][j] = i64::from(keep);
                rows[j][i] = i64::from(!keep);
                pair += 1;
            }
        }
        CommutationMatrix::from_rows(&rows).unwrap()
    }

    fn element(crystal: &InfinityCrystal<CartanType>, path: &[usize]) -> Monomial {
        let one = crystal.module_generators()[0].clone();
        crystal.f_string(&one, path).unwrap().unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn phi_minus_epsilon_is_pairing(
            name in prop::sample::select(TYPES.to_vec()),
            path in positions(),
            i in 0usize..8,
        ) {
            let ct = cartan(name);
            let crystal = InfinityCrystal::new(ct.clone(), None, Flavor::Y).unwrap();
            let m = element(&crystal, &labels(&ct, &path));
            let i = labels(&ct, &[i])[0];

            let phi = crystal.phi(&m, i).unwrap();
            let eps = crystal.epsilon(&m, i).unwrap();
            let wt = crystal.weight(&m).unwrap();
            prop_assert_eq!(phi - eps, wt.coefficient(i));
        }

        #[test]
        fn operators_are_local_inverses(
            name in prop::sample::select(TYPES.to_vec()),
            path in positions(),
            i in 0usize..8,
        ) {
            let ct = cartan(name);
            let crystal = InfinityCrystal::new(ct.clone(), None, Flavor::Y).unwrap();
            let m = element(&crystal, &labels(&ct, &path));
            let i = labels(&ct, &[i])[0];

            let lowered = crystal.f(&m, i).unwrap().unwrap();
            prop_assert!(crystal.epsilon(&lowered, i).unwrap() > Integer::zero());
            prop_assert_eq!(crystal.e(&lowered, i).unwrap(), Some(m.clone()));

            if crystal.epsilon(&m, i).unwrap() > Integer::zero() {
                let raised = crystal.e(&m, i).unwrap().unwrap();
                prop_assert_eq!(crystal.f(&raised, i).unwrap(), Some(m));
            } else {
                prop_assert_eq!(crystal.e(&m, i).unwrap(), None);
            }
        }

        #[test]
        fn operators_shift_weight_by_simple_root(
            name in prop::sample::select(TYPES.to_vec()),
            path in positions(),
            i in 0usize..8,
        ) {
            let ct = cartan(name);
            let crystal = InfinityCrystal::new(ct.clone(), None, Flavor::Y).unwrap();
            let m = element(&crystal, &labels(&ct, &path));
            let i = labels(&ct, &[i])[0];
            let alpha = ct.weight_lattice_realization().simple_root(i).unwrap();
            let wt = crystal.weight(&m).unwrap();

            let lowered = crystal.f(&m, i).unwrap().unwrap();
            prop_assert_eq!(crystal.weight(&lowered).unwrap(), &wt - &alpha);
            if let Some(raised) = crystal.e(&m, i).unwrap() {
                prop_assert_eq!(crystal.weight(&raised).unwrap(), &wt + &alpha);
            }
        }

        #[test]
        fn a_and_y_flavors_agree(
            name in prop::sample::select(TYPES.to_vec()),
            path in positions(),
        ) {
            let ct = cartan(name);
            let y = InfinityCrystal::new(ct.clone(), None, Flavor::Y).unwrap();
            let a = InfinityCrystal::new(ct.clone(), None, Flavor::A).unwrap();
            let path = labels(&ct, &path);

            let m_y = element(&y, &path);
            let m_a = element(&a, &path);
            prop_assert_eq!(a.algebra().to_y(&m_a).unwrap(), m_y.clone());
            prop_assert_eq!(a.weight(&m_a).unwrap(), y.weight(&m_y).unwrap());
            for &i in ct.index_set() {
                prop_assert_eq!(a.phi(&m_a, i).unwrap(), y.phi(&m_y, i).unwrap());
                prop_assert_eq!(a.epsilon(&m_a, i).unwrap(), y.epsilon(&m_y, i).unwrap());

                // both flavors raise along the same edge, or both have none
                let raised_a = a.e(&m_a, i).unwrap().map(|r| a.algebra().to_y(&r).unwrap());
                prop_assert_eq!(raised_a, y.e(&m_y, i).unwrap());
            }
        }

        #[test]
        fn any_valid_commutation_keeps_local_inverses(
            name in prop::sample::select(TYPES.to_vec()),
            orientations in orientations(),
            path in positions(),
            i in 0usize..8,
        ) {
            let ct = cartan(name);
            let c = commutation(ct.rank(), &orientations);
            let crystal = InfinityCrystal::new(ct.clone(), Some(c), Flavor::Y).unwrap();
            let m = element(&crystal, &labels(&ct, &path));
            let i = labels(&ct, &[i])[0];

            prop_assert!(m.exponents().iter().all(|(&(_, k), _)| k >= 0));
            let lowered = crystal.f(&m, i).unwrap().unwrap();
            prop_assert_eq!(crystal.e(&lowered, i).unwrap(), Some(m.clone()));
            if let Some(raised) = crystal.e(&m, i).unwrap() {
                prop_assert_eq!(crystal.f(&raised, i).unwrap(), Some(m.clone()));
            }

            let wt = crystal.weight(&m).unwrap();
            let phi = crystal.phi(&m, i).unwrap();
            let eps = crystal.epsilon(&m, i).unwrap();
            prop_assert_eq!(phi - eps, wt.coefficient(i));
        }

        #[test]
        fn any_valid_commutation_keeps_flavors_in_step(
            name in prop::sample::select(TYPES.to_vec()),
            orientations in orientations(),
            path in positions(),
        ) {
            let ct = cartan(name);
            let c = commutation(ct.rank(), &orientations);
            let y = InfinityCrystal::new(ct.clone(), Some(c.clone()), Flavor::Y).unwrap();
            let a = InfinityCrystal::new(ct.clone(), Some(c), Flavor::A).unwrap();
            let path = labels(&ct, &path);

            let m_y = element(&y, &path);
            let m_a = element(&a, &path);
            prop_assert_eq!(a.algebra().to_y(&m_a).unwrap(), m_y.clone());
            for &i in ct.index_set() {
                prop_assert_eq!(a.phi(&m_a, i).unwrap(), y.phi(&m_y, i).unwrap());
                let raised_a = a.e(&m_a, i).unwrap().map(|r| a.algebra().to_y(&r).unwrap());
                prop_assert_eq!(raised_a, y.e(&m_y, i).unwrap());
            }
        }

        #[test]
        fn highest_weight_elements_have_nonnegative_strings(
            name in prop::sample::select(FINITE_TYPES.to_vec()),
            coefficients in prop::collection::vec(0i64..3, 4),
            path in positions(),
        ) {
            let ct = cartan(name);
            let la = Weight::from_coefficients(
                ct.index_set().iter().zip(&coefficients).map(|(&i, &c)| (i, c)),
            );
            let crystal = HighestWeightCrystal::new(ct.clone(), la, None).unwrap();

            let mut m = crystal.highest_weight_vector().clone();
            for i in labels(&ct, &path) {
                if let Some(next) = crystal.f(&m, i).unwrap() {
                    m = next;
                }
            }
            for &i in ct.index_set() {
                prop_assert!(crystal.phi(&m, i).unwrap() >= Integer::zero());
                prop_assert!(crystal.epsilon(&m, i).unwrap() >= Integer::zero());
            }
        }
    }

    #[test]
    fn finite_family_parse_matches_constructor() {
        let parsed = cartan("B2");
        let built = CartanType::finite(CartanFamily::B, 2).unwrap();
        assert_eq!(*parsed, built);
    }
}
