//! Link allocation problem definition.

use super::error::SolveError;
use super::objective;
use num_traits::Float;

/// Immutable parameters of a link allocation problem.
///
/// Holds the three feasible-region bounds and the three positive cost
/// coefficients of the latency objective `a/x1 + b/x2 + c/x3`. All six
/// values must be finite and strictly positive, and the rate floor must
/// stay below ten times the bandwidth ceiling; `validate` enforces this
/// before any solve runs.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use link_optimiser::lagrange::LinkProblem;
///
/// let problem = LinkProblem::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5);
/// assert!(problem.validate().is_ok());
///
/// let bad = LinkProblem::new(50.0, 1.0, 1.0, 1.0, 1.0, 1.0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkProblem<T: Float> {
    /// Minimum data rate floor (`x1 >= min_rate`)
    pub min_rate: T,
    /// Transmission power ceiling (`x2 <= max_power`)
    pub max_power: T,
    /// Bandwidth ceiling (`x3 <= max_bandwidth`)
    pub max_bandwidth: T,
    /// Cost coefficient of the rate term `a/x1`
    pub coeff_rate: T,
    /// Cost coefficient of the power term `b/x2`
    pub coeff_power: T,
    /// Cost coefficient of the bandwidth term `c/x3`
    pub coeff_bandwidth: T,
}

impl<T: Float> LinkProblem<T> {
    /// Create a new problem from bounds and coefficients.
    ///
    /// Parameters are accepted as-is; call `validate` (or let the solver
    /// do it) before trusting them.
    pub fn new(
        min_rate: T,
        max_power: T,
        max_bandwidth: T,
        coeff_rate: T,
        coeff_power: T,
        coeff_bandwidth: T,
    ) -> Self {
        Self {
            min_rate,
            max_power,
            max_bandwidth,
            coeff_rate,
            coeff_power,
            coeff_bandwidth,
        }
    }

    /// Validate the problem parameters.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All six parameters finite and strictly positive, and
    ///   `min_rate < 10 * max_bandwidth`
    /// * `Err(SolveError)` - The first violated precondition
    pub fn validate(&self) -> Result<(), SolveError> {
        let params = [
            ("min_rate", self.min_rate),
            ("max_power", self.max_power),
            ("max_bandwidth", self.max_bandwidth),
            ("coeff_rate", self.coeff_rate),
            ("coeff_power", self.coeff_power),
            ("coeff_bandwidth", self.coeff_bandwidth),
        ];
        for (name, value) in params {
            if !value.is_finite() {
                return Err(SolveError::non_finite(name, to_f64(value)));
            }
            if value <= T::zero() {
                return Err(SolveError::non_positive(name, to_f64(value)));
            }
        }

        if self.min_rate >= T::from(10.0).unwrap() * self.max_bandwidth {
            return Err(SolveError::unrealistic_rate_floor(
                to_f64(self.min_rate),
                to_f64(self.max_bandwidth),
            ));
        }

        Ok(())
    }

    /// Signed slack of the rate floor constraint: `x1 - min_rate`.
    ///
    /// Negative means the constraint is violated.
    #[inline]
    pub fn rate_slack(&self, x1: T) -> T {
        x1 - self.min_rate
    }

    /// Signed slack of the power ceiling constraint: `max_power - x2`.
    #[inline]
    pub fn power_slack(&self, x2: T) -> T {
        self.max_power - x2
    }

    /// Signed slack of the bandwidth ceiling constraint: `max_bandwidth - x3`.
    #[inline]
    pub fn bandwidth_slack(&self, x3: T) -> T {
        self.max_bandwidth - x3
    }

    /// Latency objective evaluated with this problem's coefficients.
    #[inline]
    pub fn latency(&self, x1: T, x2: T, x3: T) -> T {
        objective::latency(
            x1,
            x2,
            x3,
            self.coeff_rate,
            self.coeff_power,
            self.coeff_bandwidth,
        )
    }

    /// Feasible starting point for the iteration.
    ///
    /// Seeds the rate one unit above its floor and power/bandwidth at 80%
    /// of their ceilings, so every constraint starts inactive.
    pub fn seed(&self) -> (T, T, T) {
        let four_fifths = T::from(0.8).unwrap();
        (
            self.min_rate + T::one(),
            self.max_power * four_fifths,
            self.max_bandwidth * four_fifths,
        )
    }

    /// Latency of an unoptimised reference allocation.
    ///
    /// Evaluates the objective at the rate floor with power and bandwidth
    /// at half their ceilings. Used as the comparison point for the
    /// improvement diagnostic.
    pub fn baseline_latency(&self) -> T {
        let half = T::from(0.5).unwrap();
        self.latency(self.min_rate, self.max_power * half, self.max_bandwidth * half)
    }
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
