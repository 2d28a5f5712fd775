//! Property-based tests for scalar arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Number};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Integer::new(a);
            let neg_a = -&a;
            prop_assert!((a + neg_a).is_zero());
        }

        // Number arithmetic

        #[test]
        fn number_int_ops_stay_exact(a in small_int(), b in small_int()) {
            let a = Number::int(a);
            let b = Number::int(b);
            prop_assert!((&a + &b).is_integer());
            prop_assert!((&a - &b).is_integer());
            prop_assert!((&a * &b).is_integer());
        }

        #[test]
        fn number_int_matches_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!(Number::int(a) + Number::int(b), Number::int(a + b));
            prop_assert_eq!(Number::int(a) * Number::int(b), Number::int(a * b));
        }

        #[test]
        fn number_equality_crosses_variants(a in small_int()) {
            #[allow(clippy::cast_precision_loss)]
            let real = Number::real(a as f64);
            prop_assert_eq!(Number::int(a), real);
        }

        #[test]
        fn number_division_inverts_multiplication(a in small_int(), b in non_zero_int()) {
            let product = Number::int(a) * Number::int(b);
            prop_assert_eq!(product / Number::int(b), Number::int(a));
        }

        #[test]
        fn normalize_integral_preserves_value(a in small_int(), b in non_zero_int()) {
            let q = Number::int(a) / Number::int(b);
            let normalized = q.clone().normalize_integral();
            prop_assert_eq!(normalized.clone(), q);
            prop_assert_eq!(normalized.is_integer(), a % b == 0);
        }
    }
}
