//! Solver-specific error types.
//!
//! This module provides structured error handling for link allocation
//! solves, covering the input validation gate and the strict-positivity
//! invariant of the primal iteration.

use thiserror::Error;

/// Errors that can occur during a link allocation solve.
///
/// # Variants
///
/// - `NonPositiveParameter`: A problem parameter is zero or negative
/// - `NonFiniteParameter`: A problem parameter is NaN or infinite
/// - `UnrealisticRateFloor`: The rate floor is at least ten times the
///   bandwidth ceiling
/// - `PositivityLost`: A primal variable was driven to zero or below
///   despite the feasibility projection
///
/// Reaching the iteration cap is **not** an error; the solver returns its
/// last iterate with `TerminationStatus::MaxIterationsReached` instead.
///
/// # Examples
///
/// ```
/// use link_optimiser::lagrange::SolveError;
///
/// let err = SolveError::non_positive("min_rate", -1.0);
/// assert!(err.is_invalid_input());
/// assert!(format!("{}", err).contains("min_rate"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// A problem parameter is zero or negative.
    #[error("Invalid parameter {name}: {value} (must be strictly positive)")]
    NonPositiveParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A problem parameter is NaN or infinite.
    #[error("Invalid parameter {name}: {value} (must be finite)")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// The rate floor is unrealistically high relative to the bandwidth ceiling.
    #[error(
        "Unrealistic constraint: min_rate {min_rate} must be below 10 x max_bandwidth {max_bandwidth}"
    )]
    UnrealisticRateFloor {
        /// The rate floor
        min_rate: f64,
        /// The bandwidth ceiling
        max_bandwidth: f64,
    },

    /// A primal variable lost strict positivity during iteration.
    #[error("Primal variable {variable} lost strict positivity at iteration {iteration}")]
    PositivityLost {
        /// Which variable went non-positive
        variable: &'static str,
        /// Zero-based iteration index
        iteration: usize,
    },
}

impl SolveError {
    /// Create a non-positive parameter error.
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositiveParameter { name, value }
    }

    /// Create a non-finite parameter error.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { name, value }
    }

    /// Create an unrealistic rate floor error.
    pub fn unrealistic_rate_floor(min_rate: f64, max_bandwidth: f64) -> Self {
        Self::UnrealisticRateFloor {
            min_rate,
            max_bandwidth,
        }
    }

    /// Create a positivity lost error.
    pub fn positivity_lost(variable: &'static str, iteration: usize) -> Self {
        Self::PositivityLost {
            variable,
            iteration,
        }
    }

    /// Check if this error came from the input validation gate.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NonPositiveParameter { .. }
                | Self::NonFiniteParameter { .. }
                | Self::UnrealisticRateFloor { .. }
        )
    }

    /// Check if this is a positivity lost error.
    pub fn is_positivity_lost(&self) -> bool {
        matches!(self, Self::PositivityLost { .. })
    }
}
