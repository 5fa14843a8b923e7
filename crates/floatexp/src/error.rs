//! Errors reported when validating expansions.

use thiserror::Error;

/// Why a component sequence is not a valid expansion.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ExpansionError {
    /// No components were given.
    #[error("an expansion needs at least one component")]
    Empty,

    /// A component is NaN or infinite.
    #[error("component {index} is not finite: {value}")]
    NonFinite {
        /// Position of the offending component.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A component is larger in magnitude than its predecessor.
    #[error("component {index} is larger in magnitude than its predecessor")]
    Unsorted {
        /// Position of the offending component.
        index: usize,
    },

    /// A component exceeds one ulp of its predecessor.
    #[error("component {index} overlaps its predecessor")]
    Overlapping {
        /// Position of the offending component.
        index: usize,
    },
}
