//! # link_optimiser
//!
//! Lagrange multiplier solver for wireless link latency allocation.
//!
//! Given a minimum data-rate floor, a transmission-power ceiling, and a
//! bandwidth ceiling, the solver minimises the separable latency objective
//! `a/x1 + b/x2 + c/x3` over the three link variables (rate, power,
//! bandwidth) using projected gradient descent on the primal variables
//! coupled with projected ascent on the constraint multipliers.
//!
//! ## Modules
//!
//! - `lagrange`: Problem definition, solver configuration, and the
//!   fixed-step primal-dual iteration
//!
//! ## Example
//!
//! ```
//! use link_optimiser::lagrange::{LagrangeSolver, LinkProblem, TerminationStatus};
//!
//! let problem = LinkProblem::new(5.0, 2.5, 20.0, 1.2, 0.8, 0.5);
//! let allocation = LagrangeSolver::with_defaults().solve(&problem).unwrap();
//!
//! assert_eq!(allocation.status, TerminationStatus::Converged);
//! assert!(allocation.rate >= 5.0);
//! assert!(allocation.latency > 0.0);
//! ```

pub mod lagrange;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::lagrange::*;
}
