//! CLI error types.

use link_optimiser::lagrange::SolveError;
use thiserror::Error;

/// Errors surfaced by the `linklat` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// The solver rejected the inputs or failed numerically.
    #[error("{0}")]
    Solve(#[from] SolveError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
