//! # floatexp
//!
//! Extended-precision arithmetic on floating-point expansions.
//!
//! An [`Expansion`] stores a real number as several `f64` components whose
//! exact sum is the value, giving roughly 53 bits of precision per
//! component. Results are renormalized after every operation and keep as
//! many components as the longer operand.
//!
//! ## Quick Start
//!
//! ```rust
//! use floatexp::prelude::*;
//!
//! let one = Expansion::new(vec![1.0, 0.0]).unwrap();
//! let tiny = Expansion::new(vec![1e-20]).unwrap();
//!
//! // A plain f64 addition would lose the small term.
//! let sum = &one + &tiny;
//! assert_eq!(sum.components(), &[1.0, 1e-20]);
//! ```
//!
//! ## Precision
//!
//! Addition and subtraction are exact whenever the result fits in the
//! output length. Multiplication approximates its highest-order cross
//! terms with plain rounding, and division inherits that error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod expansion;
pub mod ops;


pub use error::ExpansionError;
pub use expansion::Expansion;
pub use floatexp_core as core;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ops::{add, div, mul, sub};
    pub use crate::{Expansion, ExpansionError};
    pub use num_traits::{One, Zero};
}
