//! Property-based tests for exact integer arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::Integer;

    // Exponents in practice stay small
    fn exponent() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn wide() -> impl Strategy<Value = Integer> {
        (any::<i64>(), any::<i64>()).prop_map(|(hi, lo)| Integer::new(hi) * Integer::new(i64::MAX) + Integer::new(lo))
    }

    proptest! {
        #[test]
        fn ring_laws_hold_beyond_machine_words(a in wide(), b in wide(), c in wide()) {
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert!((&a - &a).is_zero());
            prop_assert_eq!(-(-a.clone()), a);
        }

        #[test]
        fn assign_ops_match_binary_ops(a in exponent(), b in exponent()) {
            let mut acc = Integer::new(a);
            acc += &Integer::new(b);
            prop_assert!(acc.equals(a + b));
            acc -= &Integer::new(b);
            prop_assert!(acc.equals(a));
        }

        #[test]
        fn running_maximum_matches_machine_words(values in prop::collection::vec(exponent(), 1..24)) {
            let mut running = Integer::zero();
            let mut best: Option<Integer> = None;
            for &v in &values {
                running += &Integer::new(v);
                if best.as_ref().map_or(true, |b| running > *b) {
                    best = Some(running.clone());
                }
            }
            let expected = values
                .iter()
                .scan(0i64, |acc, &v| {
                    *acc += v;
                    Some(*acc)
                })
                .max();
            prop_assert_eq!(best.and_then(|b| b.to_i64()), expected);
            let total: Integer = values.iter().map(|&v| Integer::new(v)).sum();
            prop_assert!(total.equals(values.iter().sum()));
        }

        #[test]
        fn sign_queries_agree(a in exponent()) {
            let x = Integer::new(a);
            prop_assert_eq!(i64::from(x.signum()), a.signum());
            prop_assert_eq!(x.is_negative(), a < 0);
            prop_assert_eq!(x.is_positive(), a > 0);
            prop_assert!(x.abs().equals(a.abs()));
        }

        #[test]
        fn decimal_text_parses_back(a in wide()) {
            let parsed: Integer = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }
    }
}
