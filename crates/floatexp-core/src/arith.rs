//! Arithmetic over raw component slices.
//!
//! Every operator returns `max(a.len(), b.len())` components. Operands are
//! never modified: zero-extension happens on owned copies.
//!
//! Operands must be non-empty and sorted by nonincreasing magnitude. This
//! is checked with `debug_assert!` at the public entry points only; the
//! operators call each other through unchecked paths, since intermediate
//! buffers are allowed to overlap.

use crate::distill::{cascade_sum, renormalize};
use crate::eft::two_prod;
use crate::merge::{merge, merge_negated};

/// Returns true if `c` is non-empty and sorted by nonincreasing magnitude.
///
/// NaN components are not rejected.
#[must_use]
pub fn is_magnitude_sorted(c: &[f64]) -> bool {
    !c.is_empty() && c.windows(2).all(|w| !(w[1].abs() > w[0].abs()))
}

macro_rules! debug_check_operands {
    ($a:expr, $b:expr) => {
        debug_assert!(
            is_magnitude_sorted($a),
            "left operand must be non-empty and sorted by magnitude: {:?}",
            $a
        );
        debug_assert!(
            is_magnitude_sorted($b),
            "right operand must be non-empty and sorted by magnitude: {:?}",
            $b
        );
    };
}

/// Sum of two expansions.
#[must_use]
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_check_operands!(a, b);
    renormalize(&merge(a, b), a.len().max(b.len()))
}

/// Difference of two expansions.
#[must_use]
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_check_operands!(a, b);
    sub_unchecked(a, b)
}

/// Product of two expansions.
#[must_use]
pub fn mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_check_operands!(a, b);
    mul_unchecked(a, b)
}

/// Quotient of two expansions.
///
/// A divisor whose leading component is zero is not rejected: the result
/// holds IEEE-754 infinities or NaN.
#[must_use]
pub fn div(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_check_operands!(a, b);
    div_unchecked(a, b)
}

fn sub_unchecked(a: &[f64], b: &[f64]) -> Vec<f64> {
    renormalize(&merge_negated(a, b), a.len().max(b.len()))
}

/// Copies `c` into a buffer of length `len`, padding with zeros.
fn zero_extended(c: &[f64], len: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(c);
    out.resize(len, 0.0);
    out
}

/// Diagonal-by-diagonal product.
///
/// Diagonal `n` collects the exact products `a[i] * b[n - i]`. Their
/// rounded parts are summed together with the errors carried from earlier
/// diagonals; the leading term becomes `r[n]` and every residue is carried
/// on. The carried buffer holds `n * n` terms when diagonal `n` starts.
/// Cross products of order `d` and the leftover errors are folded into
/// `r[d]` with plain rounding before the final renormalization.
fn mul_unchecked(a: &[f64], b: &[f64]) -> Vec<f64> {
    let d = a.len().max(b.len());
    let a = zero_extended(a, d);
    let b = zero_extended(b, d);

    let mut r = vec![0.0; d + 1];
    let first = two_prod(a[0], b[0]);
    r[0] = first.value;
    let mut errors = vec![first.err];

    let mut products = Vec::with_capacity(d);
    let mut product_errors = Vec::with_capacity(d);
    for n in 1..d {
        products.clear();
        product_errors.clear();
        for i in 0..=n {
            let p = two_prod(a[i], b[n - i]);
            products.push(p.value);
            product_errors.push(p.err);
        }

        let s = cascade_sum(&merge(&products, &errors));
        r[n] = s[0];
        errors = merge(&s[1..], &product_errors);
    }

    let mut tail = 0.0;
    for i in 1..d {
        tail += a[i] * b[d - i];
    }
    for &e in &errors {
        tail += e;
    }
    r[d] = tail;

    renormalize(&r, d)
}

/// Long division by repeated reduction of the remainder.
///
/// Each quotient digit is the leading remainder component divided by the
/// leading divisor component.
fn div_unchecked(a: &[f64], b: &[f64]) -> Vec<f64> {
    let d = a.len().max(b.len());
    let b = zero_extended(b, d);
    let mut remainder = zero_extended(a, d);

    let mut q = Vec::with_capacity(d);
    q.push(a[0] / b[0]);
    for i in 1..d {
        let step = mul_unchecked(&[q[i - 1]], &b);
        remainder = renormalize(&sub_unchecked(&remainder, &step), d);
        q.push(remainder[0] / b[0]);
        tracing::trace!(digit = i, quotient = q[i], "division step");
    }

    renormalize(&q, d)
}
