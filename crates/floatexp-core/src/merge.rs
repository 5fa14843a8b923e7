//! Magnitude-ordered merging of component sequences.
//!
//! Both inputs are expected to be sorted by nonincreasing absolute value.
//! The output keeps that order. Sub-ranges of a buffer are merged by
//! passing slices.

/// Merges two magnitude-sorted sequences. On equal magnitude the element
/// from `b` is taken first.
#[must_use]
pub fn merge(a: &[f64], b: &[f64]) -> Vec<f64> {
    merge_with(a, b, |x| x)
}

/// Merges `a` with the negation of `b`.
///
/// Negation keeps magnitudes, so the interleaving is the same as for
/// [`merge`]; this is how subtraction feeds the renormalizer.
#[must_use]
pub fn merge_negated(a: &[f64], b: &[f64]) -> Vec<f64> {
    merge_with(a, b, |x| -x)
}

#[inline]
fn merge_with(a: &[f64], b: &[f64], map_b: impl Fn(f64) -> f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i].abs() > b[j].abs() {
            result.push(a[i]);
            i += 1;
        } else {
            result.push(map_b(b[j]));
            j += 1;
        }
    }

    result.extend_from_slice(&a[i..]);
    result.extend(b[j..].iter().map(|&x| map_b(x)));
    result
}
