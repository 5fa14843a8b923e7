//! # floatexp-core
//!
//! Building blocks for floating-point expansion arithmetic.
//!
//! A floating-point expansion represents a real number as a sequence of
//! `f64` components, sorted by nonincreasing magnitude, whose exact sum is
//! the value. This crate provides:
//! - Error-free transformations (`quick_sum`, `two_sum`, `two_prod`)
//! - Magnitude-ordered merging of component sequences
//! - Renormalization of arbitrary component sequences into expansions
//! - Add, subtract, multiply and divide over raw component slices
//!
//! ## Floating-Point Environment
//!
//! Every algorithm here assumes IEEE-754 binary64 arithmetic with
//! round-to-nearest-even. Rust never contracts `a * b + c` into a fused
//! multiply-add and never reassociates float expressions, so plain `f64`
//! code satisfies this on every tier-1 target. Do not build this crate
//! with flags that enable fast-math style contraction.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod distill;
pub mod eft;
pub mod merge;

#[cfg(any(test, feature = "oracle"))]
#[doc(hidden)]
pub mod oracle;

#[cfg(test)]
mod proptests;

pub use arith::{add, div, mul, sub};
pub use distill::renormalize;
pub use eft::{quick_sum, two_prod, two_sum, Eft};
pub use merge::{merge, merge_negated};
