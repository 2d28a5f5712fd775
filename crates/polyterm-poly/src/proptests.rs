//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::operand::Operand;
    use crate::polynomial::Polynomial;
    use polyterm_numbers::Number;

    // Strategy for generating small integer coefficients. Within ±20,
    // c / k * k is exact in f64 for every k in 1..=7.
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..=20i64
    }

    // Strategy for generating sparse polynomials (degree 0-6, up to 5 terms).
    // Exponents are distinct so no coefficient is a sum leaving ±20.
    fn small_poly() -> impl Strategy<Value = Polynomial> {
        proptest::collection::btree_map(0u32..=6, small_coeff(), 0..=5).prop_map(|terms| {
            Polynomial::from_terms(terms.into_iter().map(|(exp, coeff)| (coeff, exp)))
        })
    }

    // Strategy for generating monic divisors of degree 1-3, whose quotients
    // stay integral so long division is exact
    fn monic_poly() -> impl Strategy<Value = Polynomial> {
        (1u32..=3, proptest::collection::vec(small_coeff(), 3)).prop_map(|(deg, lower)| {
            let lower = lower.into_iter().zip(0..deg);
            Polynomial::from_terms(std::iter::once((1, deg)).chain(lower))
        })
    }

    fn eval_i64(p: &Polynomial, x: i64) -> Number {
        p.eval_number(&Number::int(x))
    }

    proptest! {
        // Canonical form

        #[test]
        fn from_terms_is_canonical(p in small_poly()) {
            let terms = p.terms();
            prop_assert!(terms.iter().all(|t| !num_traits::Zero::is_zero(t.coeff())));
            prop_assert!(terms.windows(2).all(|w| w[0].exponent() > w[1].exponent()));
            prop_assert_eq!(p.degree(), terms.first().map_or(0, crate::term::Term::exponent));
        }

        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(&a + &zero, a.clone());
            prop_assert_eq!(&zero + &a, a);
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a - &b, &a + &(-&b));
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = &a * &(&b + &c);
            let right = &(&a * &b) + &(&a * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_mul_identity_and_zero(a in small_poly()) {
            prop_assert_eq!(&a * &Polynomial::one(), a.clone());
            prop_assert!((&a * &Polynomial::zero()).is_zero());
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // Integer coefficients have no zero divisors
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        // Division

        #[test]
        fn div_rem_reconstructs_dividend(p in small_poly(), d in monic_poly()) {
            let (quotient, remainder) = p.div_rem(&d).unwrap();
            prop_assert_eq!(&(&quotient * &d) + &remainder, p);
            prop_assert!(remainder.is_zero() || remainder.degree() < d.degree());
        }

        // Exponentiation

        #[test]
        fn pow_adds_exponents(a in small_poly(), m in 0u32..4, n in 0u32..4) {
            prop_assert_eq!(a.pow(m + n), &a.pow(m) * &a.pow(n));
            prop_assert_eq!(a.pow(0), Polynomial::one());
        }

        // Calculus

        #[test]
        fn derivative_inverts_antiderivative(a in small_poly()) {
            prop_assert_eq!(a.antiderivative().derivative(), a);
        }

        #[test]
        fn derivative_matches_power_rule(a in small_poly(), x in -5i64..=5) {
            let mut expected = 0i64;
            for t in a.terms() {
                let e = t.exponent();
                if e > 0 {
                    let c = t.coeff().as_integer().and_then(polyterm_numbers::Integer::to_i64).unwrap();
                    expected += c * i64::from(e) * x.pow(e - 1);
                }
            }
            prop_assert_eq!(eval_i64(&a.derivative(), x), Number::int(expected));
        }

        #[test]
        fn integral_is_antiderivative_difference(a in small_poly(), lo in -3i64..=3, hi in -3i64..=3) {
            let f = a.antiderivative();
            let expected = (eval_i64(&f, hi) - eval_i64(&f, lo)).normalize_integral();
            prop_assert_eq!(a.integral(lo, hi).unwrap(), expected);
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in -5i64..=5) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(eval_i64(&(&a + &b), x), eval_i64(&a, x) + eval_i64(&b, x));
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in -5i64..=5) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(eval_i64(&(&a * &b), x), eval_i64(&a, x) * eval_i64(&b, x));
        }

        #[test]
        fn compose_then_eval(a in small_poly(), b in small_poly(), x in -3i64..=3) {
            // a(b)(x) = a(b(x))
            let inner = eval_i64(&b, x);
            prop_assert_eq!(eval_i64(&a.compose(&b), x), a.eval_number(&inner));
        }

        #[test]
        fn evaluate_collapses_constants(a in small_poly(), x in -5i64..=5) {
            prop_assert!(matches!(a.evaluate(x), Operand::Number(_)));
        }

        // Rendering

        #[test]
        fn display_never_starts_with_plus(a in small_poly()) {
            let s = a.to_string();
            prop_assert!(!s.starts_with('+') && !s.starts_with(' '));
            prop_assert_eq!(s == "0", a.is_zero());
        }
    }
}
