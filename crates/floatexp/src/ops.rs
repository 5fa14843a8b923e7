//! The four arithmetic entry points and their operator impls.
//!
//! Every operator returns an expansion with as many components as the
//! longer operand. Operands are never modified.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use floatexp_core::arith;

use crate::Expansion;

/// Returns `a + b`.
#[must_use]
pub fn add(a: &Expansion, b: &Expansion) -> Expansion {
    Expansion::from_raw(arith::add(a.components(), b.components()))
}

/// Returns `a - b`.
#[must_use]
pub fn sub(a: &Expansion, b: &Expansion) -> Expansion {
    Expansion::from_raw(arith::sub(a.components(), b.components()))
}

/// Returns `a * b`.
#[must_use]
pub fn mul(a: &Expansion, b: &Expansion) -> Expansion {
    Expansion::from_raw(arith::mul(a.components(), b.components()))
}

/// Returns `a / b`.
///
/// A divisor with a zero leading component gives infinite or NaN
/// components.
#[must_use]
pub fn div(a: &Expansion, b: &Expansion) -> Expansion {
    Expansion::from_raw(arith::div(a.components(), b.components()))
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $func:ident) => {
        impl $trait for Expansion {
            type Output = Expansion;

            fn $method(self, rhs: Expansion) -> Expansion {
                $func(&self, &rhs)
            }
        }

        impl $trait<&Expansion> for Expansion {
            type Output = Expansion;

            fn $method(self, rhs: &Expansion) -> Expansion {
                $func(&self, rhs)
            }
        }

        impl $trait<Expansion> for &Expansion {
            type Output = Expansion;

            fn $method(self, rhs: Expansion) -> Expansion {
                $func(self, &rhs)
            }
        }

        impl $trait for &Expansion {
            type Output = Expansion;

            fn $method(self, rhs: &Expansion) -> Expansion {
                $func(self, rhs)
            }
        }
    };
}

impl_binop!(Add, add, add);
impl_binop!(Sub, sub, sub);
impl_binop!(Mul, mul, mul);
impl_binop!(Div, div, div);

impl AddAssign<&Expansion> for Expansion {
    fn add_assign(&mut self, rhs: &Expansion) {
        *self = add(self, rhs);
    }
}

impl SubAssign<&Expansion> for Expansion {
    fn sub_assign(&mut self, rhs: &Expansion) {
        *self = sub(self, rhs);
    }
}

impl MulAssign<&Expansion> for Expansion {
    fn mul_assign(&mut self, rhs: &Expansion) {
        *self = mul(self, rhs);
    }
}

impl DivAssign<&Expansion> for Expansion {
    fn div_assign(&mut self, rhs: &Expansion) {
        *self = div(self, rhs);
    }
}
