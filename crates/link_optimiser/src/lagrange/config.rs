//! Solver configuration types.
//!
//! This module provides the configuration structure for the primal-dual
//! iteration, with generic type support so the solver can run at any
//! floating-point precision.

use num_traits::Float;

/// Configuration for the Lagrange multiplier solver.
///
/// Collects the three knobs of the fixed-step iteration: step size,
/// convergence threshold, and iteration cap. There is no line search or
/// adaptive stepping; the step size is applied to both the primal descent
/// and the dual ascent direction.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use link_optimiser::lagrange::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 1000);
///
/// // Custom configuration
/// let config = SolverConfig::<f64>::builder()
///     .convergence_threshold(1e-6)
///     .max_iterations(5000)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Fixed step size for primal and dual updates.
    ///
    /// Applied unchanged on every iteration.
    /// Default: 0.01
    pub step_size: T,

    /// Convergence threshold on the objective value.
    ///
    /// The iteration stops once the objective changes by less than this
    /// amount between consecutive iterates.
    /// Default: 0.001
    pub convergence_threshold: T,

    /// Hard cap on the number of iterations.
    ///
    /// If the threshold is never met, the solver returns its last
    /// committed iterate after this many iterations.
    /// Default: 1000
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            step_size: T::from(0.01).unwrap(),
            convergence_threshold: T::from(0.001).unwrap(),
            max_iterations: 1000,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `step_size <= 0`, `convergence_threshold <= 0`, or
    /// `max_iterations == 0`.
    pub fn new(step_size: T, convergence_threshold: T, max_iterations: usize) -> Self {
        assert!(step_size > T::zero(), "step_size must be positive");
        assert!(
            convergence_threshold > T::zero(),
            "convergence_threshold must be positive"
        );
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            step_size,
            convergence_threshold,
            max_iterations,
        }
    }

    /// Create a configuration builder for fluent construction.
    pub fn builder() -> SolverConfigBuilder<T> {
        SolverConfigBuilder::new()
    }

    /// Create a high-precision configuration.
    ///
    /// Uses a tighter threshold (1e-6) and a larger iteration cap (10000).
    pub fn high_precision() -> Self {
        Self {
            convergence_threshold: T::from(1e-6).unwrap(),
            max_iterations: 10_000,
            ..Self::default()
        }
    }

    /// Create a fast configuration for interactive use.
    ///
    /// Uses a relaxed threshold (0.01) and a smaller iteration cap (200).
    pub fn fast() -> Self {
        Self {
            convergence_threshold: T::from(0.01).unwrap(),
            max_iterations: 200,
            ..Self::default()
        }
    }

    /// Set the step size.
    pub fn with_step_size(mut self, step_size: T) -> Self {
        self.step_size = step_size;
        self
    }

    /// Set the convergence threshold.
    pub fn with_convergence_threshold(mut self, threshold: T) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Builder for `SolverConfig`.
#[derive(Debug, Clone)]
pub struct SolverConfigBuilder<T: Float> {
    config: SolverConfig<T>,
}

impl<T: Float> SolverConfigBuilder<T> {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Set the step size.
    pub fn step_size(mut self, step_size: T) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Set the convergence threshold.
    pub fn convergence_threshold(mut self, threshold: T) -> Self {
        self.config.convergence_threshold = threshold;
        self
    }

    /// Set the maximum iterations.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SolverConfig<T> {
        self.config
    }
}

impl<T: Float> Default for SolverConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
