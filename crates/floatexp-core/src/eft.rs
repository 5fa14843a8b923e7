//! Error-free transformations.
//!
//! Each transformation turns one floating-point operation into a rounded
//! result and the exact rounding error, so that `value + err` equals the
//! true mathematical result. Both halves are returned together in an
//! [`Eft`].
//!
//! Correctness depends on IEEE-754 round-to-nearest and on the compiler
//! evaluating every intermediate exactly as written. In particular
//! `two_prod` breaks if `a * b - c` is contracted into a fused
//! multiply-add.

/// Veltkamp splitting constant for binary64: `2^27 + 1`.
pub const SPLITTER: f64 = 134_217_729.0;

/// The result of an error-free transformation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eft {
    /// The rounded floating-point result.
    pub value: f64,
    /// The exact rounding error of `value`.
    pub err: f64,
}

impl Eft {
    /// Returns `(value, err)`.
    #[must_use]
    pub const fn into_pair(self) -> (f64, f64) {
        (self.value, self.err)
    }
}

/// Fast two-sum (Dekker).
///
/// The error term is exact only when `|a| >= |b|`. The precondition is not
/// checked; violating it silently yields a wrong `err`.
#[inline]
#[must_use]
pub fn quick_sum(a: f64, b: f64) -> Eft {
    let value = a + b;
    let err = b - (value - a);
    Eft { value, err }
}

/// Two-sum (Knuth, Møller). Exact for any pair of finite operands whose
/// sum does not overflow.
#[inline]
#[must_use]
pub fn two_sum(a: f64, b: f64) -> Eft {
    let value = a + b;
    let t = value - b;
    let err = (a - t) + (b - (value - t));
    Eft { value, err }
}

/// Splits `a` into a high half and a low half of at most 26 significant
/// bits each, with `hi + lo == a` exactly.
///
/// Overflows for `|a|` above roughly `2^996`.
#[inline]
#[must_use]
pub fn split(a: f64) -> (f64, f64) {
    let t = SPLITTER * a;
    let hi = t + (a - t);
    (hi, a - hi)
}

/// Two-product (Dekker), with the splitting step inlined.
///
/// Exact as long as neither the splitting nor the product overflows and
/// the error term does not underflow.
#[inline]
#[must_use]
pub fn two_prod(a: f64, b: f64) -> Eft {
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let value = a * b;
    let err = al * bl - (((value - ah * bh) - ah * bl) - al * bh);
    Eft { value, err }
}
