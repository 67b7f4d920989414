//! Primal-dual Lagrange multiplier solver for link allocation.
//!
//! This module implements the constrained minimisation of the latency
//! objective `a/x1 + b/x2 + c/x3` subject to three one-sided box
//! constraints:
//!
//! - `x1 >= R_min` (minimum data rate)
//! - `x2 <= P_max` (maximum transmission power)
//! - `x3 <= B_max` (maximum bandwidth)
//!
//! ## Architecture
//!
//! The module provides:
//! - `LinkProblem<T>`: Immutable problem parameters with validation
//! - `SolverConfig<T>`: Step size, convergence threshold, iteration cap
//! - `LagrangeSolver<T>`: The fixed-step primal-dual iteration
//! - `Allocation<T>`: Solved variables plus termination diagnostics
//!
//! ## Method
//!
//! Each iteration takes one fixed-step gradient-descent step on the
//! primal variables, augmented by the constraint multipliers, then
//! projects back onto the feasible box. Multipliers ascend on violated
//! constraints and reset to zero the moment their constraint becomes
//! inactive. This is a first-order heuristic, not a classical dual-ascent
//! scheme; see `LagrangeSolver::solve` for the exact update rules.

mod config;
mod error;
mod objective;
mod problem;
mod solver;

pub use config::{SolverConfig, SolverConfigBuilder};
pub use error::SolveError;
pub use objective::{latency, latency_gradient};
pub use problem::LinkProblem;
pub use solver::{Allocation, LagrangeSolver, TerminationStatus};
