//! Renormalization (distillation) of component sequences.
//!
//! The pipeline turns a magnitude-ordered but possibly overlapping
//! sequence of floats into a nonoverlapping expansion of a chosen length
//! that represents the same sum:
//!
//! 1. [`cascade_sum`] folds the sequence from the smallest end, keeping
//!    every rounding error.
//! 2. [`extract_nonoverlapping`] peels nonoverlapping components off the
//!    cascade output, stopping once enough have been found.
//! 3. [`settle_sweep`] pushes carries one slot further right; it runs once
//!    per output position.
//!
//! [`renormalize`] strings them together. It extracts one component more
//! than requested and drops it after the settle sweeps, which gives the
//! sweeps room to propagate their carries.

use crate::eft::quick_sum;

/// Right-to-left `quick_sum` sweep.
///
/// The output has the same length as the input: entry `0` is the rounded
/// sum of everything, entry `i > 0` is the error produced when `a[i - 1]`
/// was folded in.
#[must_use]
pub fn cascade_sum(a: &[f64]) -> Vec<f64> {
    let Some((&last, rest)) = a.split_last() else {
        return Vec::new();
    };

    let mut out = vec![0.0; a.len()];
    let mut s = last;
    for (i, &x) in rest.iter().enumerate().rev() {
        let r = quick_sum(x, s);
        s = r.value;
        out[i + 1] = r.err;
    }
    out[0] = s;
    out
}

/// Left-to-right sweep extracting up to `out_size` nonoverlapping
/// components from a [`cascade_sum`] output.
///
/// Stops early once `out_size - 1` nonzero errors have been emitted, since
/// further components would be discarded anyway. Unused trailing slots are
/// zero. The output always has length `out_size`.
#[must_use]
pub fn extract_nonoverlapping(e: &[f64], out_size: usize) -> Vec<f64> {
    let mut f = vec![0.0; out_size];
    if out_size == 0 {
        return f;
    }
    let Some((&first, rest)) = e.split_first() else {
        return f;
    };

    let mut carry = first;
    let mut j = 0;
    for &next in rest {
        let r = quick_sum(carry, next);
        f[j] = r.value;
        if r.err == 0.0 {
            carry = r.value;
        } else {
            if j >= out_size - 1 {
                return f;
            }
            j += 1;
            carry = r.err;
        }
    }

    if carry != 0.0 {
        f[j] = carry;
    }
    f
}

/// One in-place `quick_sum` cascade over `f[begin..end]`.
///
/// Each slot receives the rounded sum of the running carry and its right
/// neighbour; the final carry lands in `f[end - 1]`.
///
/// # Panics
///
/// Panics if `begin >= end` or `end > f.len()`.
pub fn settle_sweep(f: &mut [f64], begin: usize, end: usize) {
    let window = &mut f[begin..end];
    let mut p = window[0];
    for i in 0..window.len() - 1 {
        let r = quick_sum(p, window[i + 1]);
        window[i] = r.value;
        p = r.err;
    }
    window[window.len() - 1] = p;
}

/// Renormalizes `a` into a nonoverlapping expansion with `out_size`
/// components.
///
/// `a` should be sorted by nonincreasing magnitude; components may
/// overlap. Precision beyond `out_size` components is rounded away.
#[must_use]
pub fn renormalize(a: &[f64], out_size: usize) -> Vec<f64> {
    let mut f = extract_nonoverlapping(&cascade_sum(a), out_size + 1);
    for i in 0..out_size {
        settle_sweep(&mut f, i, out_size);
    }
    f.truncate(out_size);
    f
}
