//! The expansion value type.
//!
//! An [`Expansion`] is a non-empty sequence of `f64` components sorted by
//! nonincreasing magnitude, where each nonzero component is at most one
//! ulp of its predecessor. The exact sum of the components is the value.

use std::fmt;
use std::ops::Neg;

use floatexp_core::distill;
use num_traits::{One, Zero};

use crate::error::ExpansionError;

/// A floating-point expansion.
#[derive(Clone, PartialEq)]
pub struct Expansion(Vec<f64>);

#[allow(clippy::len_without_is_empty)]
impl Expansion {
    /// Creates an expansion from its components, largest first.
    ///
    /// # Errors
    ///
    /// Returns an error if `components` is empty, holds a non-finite value,
    /// is not sorted by nonincreasing magnitude, or has a component larger
    /// than one ulp of its predecessor.
    pub fn new(components: Vec<f64>) -> Result<Self, ExpansionError> {
        if let Err(err) = validate(&components) {
            tracing::debug!(?components, %err, "rejected expansion");
            return Err(err);
        }
        Ok(Self(components))
    }

    /// Wraps the output of an operator without validating it.
    pub(crate) fn from_raw(components: Vec<f64>) -> Self {
        debug_assert!(!components.is_empty(), "operators never return empty expansions");
        Self(components)
    }

    /// Returns the components, largest first.
    #[must_use]
    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the expansion, returning its components.
    #[must_use]
    pub fn into_components(self) -> Vec<f64> {
        self.0
    }

    /// Returns the number of components, trailing zeros included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the leading (largest) component.
    #[must_use]
    pub fn leading(&self) -> f64 {
        self.0[0]
    }

    /// Returns the floating-point sum of the components, smallest first.
    ///
    /// This is a rounded approximation of the value.
    #[must_use]
    pub fn approx(&self) -> f64 {
        self.0.iter().rev().sum()
    }

    /// Redistributes the value over `len` components, rounding away
    /// anything that does not fit.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    #[must_use]
    pub fn renormalize(&self, len: usize) -> Self {
        assert!(len > 0, "an expansion needs at least one component");
        Self::from_raw(distill::renormalize(&self.0, len))
    }
}

/// Returns the gap between `|x|` and the next larger double.
fn ulp(x: f64) -> f64 {
    let a = x.abs();
    f64::from_bits(a.to_bits() + 1) - a
}

fn validate(c: &[f64]) -> Result<(), ExpansionError> {
    if c.is_empty() {
        return Err(ExpansionError::Empty);
    }
    if let Some(index) = c.iter().position(|x| !x.is_finite()) {
        return Err(ExpansionError::NonFinite { index, value: c[index] });
    }
    for (i, w) in c.windows(2).enumerate() {
        let (prev, cur) = (w[0], w[1]);
        if cur.abs() > prev.abs() {
            return Err(ExpansionError::Unsorted { index: i + 1 });
        }
        if cur != 0.0 && cur.abs() > ulp(prev) {
            return Err(ExpansionError::Overlapping { index: i + 1 });
        }
    }
    Ok(())
}

impl Zero for Expansion {
    fn zero() -> Self {
        Self(vec![0.0])
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0.0)
    }
}

impl One for Expansion {
    fn one() -> Self {
        Self(vec![1.0])
    }
}

impl Neg for Expansion {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in &mut self.0 {
            *c = -*c;
        }
        self
    }
}

impl Neg for &Expansion {
    type Output = Expansion;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl fmt::Debug for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expansion({:?})", self.0)
    }
}

impl TryFrom<Vec<f64>> for Expansion {
    type Error = ExpansionError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

impl AsRef<[f64]> for Expansion {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}
