//! Fixed-step primal-dual iteration.
//!
//! This module provides `LagrangeSolver<T>`, the engine that minimises
//! the latency objective under the three one-sided link constraints, and
//! `Allocation<T>`, the immutable result it returns.

use super::config::SolverConfig;
use super::error::SolveError;
use super::objective;
use super::problem::LinkProblem;
use num_traits::Float;

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationStatus {
    /// The objective changed by less than the convergence threshold.
    Converged,
    /// The iteration cap was reached; the result is the last committed
    /// iterate and may not be an optimum.
    MaxIterationsReached,
}

/// Result of a link allocation solve.
///
/// Owned by the caller; nothing is shared with the solver after return.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Allocation<T: Float> {
    /// Optimised data rate (`>= min_rate`)
    pub rate: T,
    /// Optimised transmission power (`<= max_power`)
    pub power: T,
    /// Optimised bandwidth (`<= max_bandwidth`)
    pub bandwidth: T,
    /// Latency objective at the optimised point
    pub latency: T,
    /// Whether the solve converged or hit the iteration cap
    pub status: TerminationStatus,
    /// Number of iterations run
    pub iterations: usize,
}

impl<T: Float> Allocation<T> {
    /// Latency improvement over a baseline, as a percentage.
    ///
    /// Positive means this allocation is faster than the baseline.
    ///
    /// # Example
    ///
    /// ```
    /// use link_optimiser::lagrange::{LagrangeSolver, LinkProblem};
    ///
    /// let problem = LinkProblem::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5);
    /// let allocation = LagrangeSolver::with_defaults().solve(&problem).unwrap();
    /// assert!(allocation.improvement_over(problem.baseline_latency()) > 0.0);
    /// ```
    pub fn improvement_over(&self, baseline: T) -> T {
        (baseline - self.latency) / baseline * T::from(100.0).unwrap()
    }
}

/// Primal-dual Lagrange multiplier solver.
///
/// Runs a fixed-step first-order iteration: gradient descent on the three
/// primal variables augmented by the constraint multipliers, projected
/// ascent on the multipliers themselves, and clamping back onto the
/// feasible box after every step.
///
/// The dual update is deliberately non-classical: a multiplier ascends
/// only while its constraint is violated and resets to exactly zero the
/// moment the constraint becomes inactive, rather than decaying. This
/// matches the deployed behaviour of the allocation pipeline and must not
/// be "corrected" to textbook dual ascent.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
///
/// ```
/// use link_optimiser::lagrange::{LagrangeSolver, LinkProblem, SolverConfig};
///
/// let problem = LinkProblem::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5);
/// let solver = LagrangeSolver::new(SolverConfig::default());
/// let allocation = solver.solve(&problem).unwrap();
///
/// assert!(allocation.rate >= problem.min_rate);
/// assert!(allocation.power <= problem.max_power);
/// assert!(allocation.bandwidth <= problem.max_bandwidth);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> LagrangeSolver<T> {
    /// Create a new solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solve a link allocation problem.
    ///
    /// Validates the parameters, then iterates from the strictly feasible
    /// seed until the objective change drops below the convergence
    /// threshold or the iteration cap is reached. Reaching the cap is not
    /// an error; the returned `status` distinguishes the two outcomes.
    ///
    /// The solver is a pure function of its inputs: identical problem and
    /// configuration yield bit-identical allocations.
    ///
    /// # Returns
    ///
    /// * `Ok(allocation)` - Final iterate with termination diagnostics
    /// * `Err(SolveError)` - Parameters rejected by the validation gate,
    ///   or a primal variable lost strict positivity
    pub fn solve(&self, problem: &LinkProblem<T>) -> Result<Allocation<T>, SolveError> {
        problem.validate()?;

        let step = self.config.step_size;
        let zero = T::zero();

        let (mut x1, mut x2, mut x3) = problem.seed();
        let mut lambda1 = zero;
        let mut lambda2 = zero;
        let mut lambda3 = zero;

        // Infinity guarantees the first iteration never tests as converged.
        let mut prev_latency = T::infinity();
        let mut status = TerminationStatus::MaxIterationsReached;
        let mut iterations = self.config.max_iterations;

        for iter in 0..self.config.max_iterations {
            let (grad_x1, grad_x2, grad_x3) = objective::latency_gradient(
                x1,
                x2,
                x3,
                problem.coeff_rate,
                problem.coeff_power,
                problem.coeff_bandwidth,
            );

            let rate_slack = problem.rate_slack(x1);
            let power_slack = problem.power_slack(x2);
            let bandwidth_slack = problem.bandwidth_slack(x3);

            // Projected ascent on each multiplier while its constraint is
            // violated; hard reset to zero once it is inactive.
            lambda1 = if rate_slack < zero {
                (lambda1 - step * rate_slack).max(zero)
            } else {
                zero
            };
            lambda2 = if power_slack < zero {
                (lambda2 - step * power_slack).max(zero)
            } else {
                zero
            };
            lambda3 = if bandwidth_slack < zero {
                (lambda3 - step * bandwidth_slack).max(zero)
            } else {
                zero
            };

            // Descent step on the Lagrangian. The floor constraint pushes
            // the rate up (+lambda1); the ceilings push power and
            // bandwidth down (-lambda2, -lambda3).
            let new_x1 = (x1 - step * (grad_x1 + lambda1)).max(problem.min_rate);
            let new_x2 = (x2 - step * (grad_x2 - lambda2)).min(problem.max_power);
            let new_x3 = (x3 - step * (grad_x3 - lambda3)).min(problem.max_bandwidth);

            // The projection above is the only guard between the iterate
            // and a division by zero in the next gradient evaluation.
            if new_x1 <= zero {
                return Err(SolveError::positivity_lost("rate", iter));
            }
            if new_x2 <= zero {
                return Err(SolveError::positivity_lost("power", iter));
            }
            if new_x3 <= zero {
                return Err(SolveError::positivity_lost("bandwidth", iter));
            }

            let current_latency = problem.latency(new_x1, new_x2, new_x3);

            x1 = new_x1;
            x2 = new_x2;
            x3 = new_x3;

            if (prev_latency - current_latency).abs() < self.config.convergence_threshold {
                status = TerminationStatus::Converged;
                iterations = iter + 1;
                break;
            }

            prev_latency = current_latency;
        }

        Ok(Allocation {
            rate: x1,
            power: x2,
            bandwidth: x3,
            latency: problem.latency(x1, x2, x3),
            status,
            iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_problem() -> LinkProblem<f64> {
        LinkProblem::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5)
    }

    #[test]
    fn test_reference_scenario_converges() {
        let allocation = LagrangeSolver::with_defaults()
            .solve(&reference_problem())
            .unwrap();

        assert_eq!(allocation.status, TerminationStatus::Converged);
        assert!(allocation.iterations <= 1000);
        assert!(allocation.rate >= 5.0);
        assert_relative_eq!(allocation.rate, 6.0, epsilon = 0.1);
        assert!(allocation.power <= 2.5);
        assert!(allocation.bandwidth <= 20.0);
        assert!(allocation.latency > 0.0);
        assert!(allocation.latency.is_finite());
    }

    #[test]
    fn test_validation_runs_before_solving() {
        let solver = LagrangeSolver::with_defaults();

        let mut problem = reference_problem();
        problem.min_rate = -1.0;
        assert!(solver.solve(&problem).unwrap_err().is_invalid_input());

        let unrealistic = LinkProblem::new(50.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        assert!(solver.solve(&unrealistic).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_feasibility_at_termination() {
        let problems = [
            reference_problem(),
            LinkProblem::new(0.5, 0.5, 0.5, 2.0, 2.0, 2.0),
            LinkProblem::new(10.0, 30.0, 40.0, 0.1, 5.0, 3.0),
            LinkProblem::new(1.0, 100.0, 0.2, 4.0, 0.3, 0.9),
        ];
        let solver = LagrangeSolver::with_defaults();
        for problem in problems {
            let allocation = solver.solve(&problem).unwrap();
            assert!(allocation.rate >= problem.min_rate - 1e-9);
            assert!(allocation.power <= problem.max_power + 1e-9);
            assert!(allocation.bandwidth <= problem.max_bandwidth + 1e-9);
            assert!(allocation.latency > 0.0);
        }
    }

    #[test]
    fn test_objective_never_worse_than_seed() {
        let problem = reference_problem();
        let (s1, s2, s3) = problem.seed();
        let allocation = LagrangeSolver::with_defaults().solve(&problem).unwrap();
        assert!(allocation.latency <= problem.latency(s1, s2, s3));
    }

    #[test]
    fn test_bit_identical_reruns() {
        let problem = reference_problem();
        let solver = LagrangeSolver::with_defaults();
        let first = solver.solve(&problem).unwrap();
        let second = solver.solve(&problem).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iteration_cap_reported() {
        // One iteration cannot satisfy an impossibly tight threshold.
        let config = SolverConfig::new(0.01, 1e-300, 1);
        let allocation = LagrangeSolver::new(config)
            .solve(&reference_problem())
            .unwrap();
        assert_eq!(allocation.status, TerminationStatus::MaxIterationsReached);
        assert_eq!(allocation.iterations, 1);
    }

    #[test]
    fn test_loose_threshold_converges_immediately() {
        // An enormous threshold converges on the first comparison, which
        // happens on iteration two because the first compares against
        // infinity.
        let config = SolverConfig::new(0.01, 1e6, 1000);
        let allocation = LagrangeSolver::new(config)
            .solve(&reference_problem())
            .unwrap();
        assert_eq!(allocation.status, TerminationStatus::Converged);
        assert_eq!(allocation.iterations, 2);
    }

    #[test]
    fn test_iterations_within_cap() {
        let allocation = LagrangeSolver::with_defaults()
            .solve(&reference_problem())
            .unwrap();
        assert!(allocation.iterations >= 1);
        assert!(allocation.iterations <= 1000);
    }

    #[test]
    fn test_improvement_over_baseline() {
        let problem = reference_problem();
        let allocation = LagrangeSolver::with_defaults().solve(&problem).unwrap();
        let baseline = problem.baseline_latency();
        assert!(baseline >= allocation.latency);
        assert!(allocation.improvement_over(baseline) >= 0.0);
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig::new(0.02, 1e-4, 500);
        let solver = LagrangeSolver::new(config);
        assert_eq!(solver.config().max_iterations, 500);
    }

    #[test]
    fn test_with_f32() {
        let problem = LinkProblem::new(5.0_f32, 2.5, 20.0, 1.2, 0.8, 0.5);
        let allocation = LagrangeSolver::with_defaults().solve(&problem).unwrap();
        assert!(allocation.rate >= 5.0);
        assert!(allocation.latency > 0.0);
    }
}
