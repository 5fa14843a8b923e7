//! Property-based tests for the expansion primitives.
//!
//! Exact results are checked against `dashu` rationals.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::distill::{cascade_sum, renormalize};
    use crate::eft::{quick_sum, two_prod, two_sum};
    use crate::merge::{merge, merge_negated};
    use crate::oracle::{exact, exact_sum};
    use crate::{add, mul, sub};

    // Doubles spread over a wide but overflow-free range of magnitudes
    fn scaled() -> impl Strategy<Value = f64> {
        (-1.0f64..1.0, -60i32..60).prop_map(|(m, e)| m * 2f64.powi(e))
    }

    // A two-component expansion produced by an exact two-sum
    fn pair() -> impl Strategy<Value = [f64; 2]> {
        (scaled(), scaled()).prop_map(|(a, b)| {
            let r = two_sum(a, b);
            [r.value, r.err]
        })
    }

    // A magnitude-sorted sequence
    fn sorted_seq() -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(scaled(), 0..=8).prop_map(|mut v| {
            v.sort_by(|x, y| y.abs().total_cmp(&x.abs()));
            v
        })
    }

    fn is_sorted(c: &[f64]) -> bool {
        c.windows(2).all(|w| w[0].abs() >= w[1].abs())
    }

    proptest! {
        // Error-free transformations

        #[test]
        fn two_sum_is_exact(a in scaled(), b in scaled()) {
            let r = two_sum(a, b);
            prop_assert_eq!(exact(r.value) + exact(r.err), exact(a) + exact(b));
        }

        #[test]
        fn quick_sum_is_exact_when_ordered(a in scaled(), b in scaled()) {
            let (a, b) = if a.abs() >= b.abs() { (a, b) } else { (b, a) };
            let r = quick_sum(a, b);
            prop_assert_eq!(exact(r.value) + exact(r.err), exact(a) + exact(b));
        }

        #[test]
        fn two_prod_is_exact(a in scaled(), b in scaled()) {
            let r = two_prod(a, b);
            prop_assert_eq!(exact(r.value) + exact(r.err), exact(a) * exact(b));
        }

        #[test]
        fn two_sum_value_is_rounded_sum(a in scaled(), b in scaled()) {
            prop_assert_eq!(two_sum(a, b).value, a + b);
            prop_assert_eq!(two_prod(a, b).value, a * b);
        }

        // Merging

        #[test]
        fn merge_keeps_magnitude_order(a in sorted_seq(), b in sorted_seq()) {
            let merged = merge(&a, &b);
            prop_assert_eq!(merged.len(), a.len() + b.len());
            prop_assert!(is_sorted(&merged));
        }

        #[test]
        fn merge_negated_keeps_order_and_sum(a in sorted_seq(), b in sorted_seq()) {
            let merged = merge_negated(&a, &b);
            prop_assert!(is_sorted(&merged));
            prop_assert_eq!(exact_sum(&merged), exact_sum(&a) - exact_sum(&b));
        }

        // Distillation

        #[test]
        fn cascade_sum_keeps_length(a in sorted_seq()) {
            prop_assert_eq!(cascade_sum(&a).len(), a.len());
        }

        #[test]
        fn renormalize_has_requested_length(a in sorted_seq(), n in 1usize..6) {
            prop_assume!(!a.is_empty());
            prop_assert_eq!(renormalize(&a, n).len(), n);
        }

        #[test]
        fn renormalize_is_idempotent(x in pair(), n in 1usize..5) {
            let once = renormalize(&x, n);
            prop_assert_eq!(renormalize(&once, n), once);
        }

        #[test]
        fn renormalize_keeps_two_sum_pairs(x in pair()) {
            prop_assert_eq!(renormalize(&x, 2), x.to_vec());
        }

        // Arithmetic

        #[test]
        fn add_of_two_doubles_is_exact(a in scaled(), b in scaled()) {
            let s = add(&[a, 0.0], &[b]);
            prop_assert_eq!(exact_sum(&s), exact(a) + exact(b));
        }

        #[test]
        fn add_zero_is_renormalize(x in pair()) {
            prop_assert_eq!(add(&x, &[0.0]), renormalize(&x, 2));
        }

        #[test]
        fn add_commutes(x in pair(), y in pair()) {
            prop_assert_eq!(add(&x, &y), add(&y, &x));
        }

        #[test]
        fn sub_self_is_zero(x in pair()) {
            prop_assert!(sub(&x, &x).iter().all(|&c| c == 0.0));
        }

        #[test]
        fn mul_one_is_renormalize(x in pair()) {
            prop_assert_eq!(mul(&x, &[1.0]), renormalize(&x, 2));
        }
    }
}
