//! JSON report formatting.
//!
//! The output contract is consumed by downstream tooling: a JSON object
//! with `rate`, `power`, and `bandwidth` at four decimal places and
//! `latency` at six. The fixed-width rendering is part of the contract,
//! so the report formats itself rather than going through a generic
//! serialiser.

use link_optimiser::lagrange::Allocation;
use std::fmt;

/// Printable solve report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimisationReport {
    /// Optimised data rate
    pub rate: f64,
    /// Optimised transmission power
    pub power: f64,
    /// Optimised bandwidth
    pub bandwidth: f64,
    /// Latency at the optimised point
    pub latency: f64,
}

impl From<Allocation<f64>> for OptimisationReport {
    fn from(allocation: Allocation<f64>) -> Self {
        Self {
            rate: allocation.rate,
            power: allocation.power,
            bandwidth: allocation.bandwidth,
            latency: allocation.latency,
        }
    }
}

impl fmt::Display for OptimisationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "  \"rate\": {:.4},", self.rate)?;
        writeln!(f, "  \"power\": {:.4},", self.power)?;
        writeln!(f, "  \"bandwidth\": {:.4},", self.bandwidth)?;
        writeln!(f, "  \"latency\": {:.6}", self.latency)?;
        write!(f, "}}")
    }
}
