//! Exact rational values of doubles, for checking results in tests.

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

/// The exact rational value of a finite double.
///
/// # Panics
///
/// Panics if `x` is NaN or infinite.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn exact(x: f64) -> RBig {
    assert!(x.is_finite(), "oracle only handles finite values");
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let mut num = IBig::from(mantissa);
    if bits >> 63 == 1 {
        num = -num;
    }
    if exp >= 0 {
        RBig::from(num << exp as usize)
    } else {
        RBig::from_parts(num, UBig::ONE << (-exp) as usize)
    }
}

/// The exact sum of a component sequence.
#[must_use]
pub fn exact_sum(c: &[f64]) -> RBig {
    c.iter().fold(RBig::ZERO, |acc, &x| acc + exact(x))
}
