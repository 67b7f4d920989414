//! Linklat CLI - Command Line Interface for the Link Latency Optimiser
//!
//! Takes the six problem parameters as positional arguments, runs the
//! Lagrange multiplier solver, and prints the optimised allocation as a
//! JSON object:
//!
//! ```text
//! linklat 5.0 2.5 20.0 1.2 0.8 0.5
//! ```
//!
//! Exit status is 0 on success and 1 on an argument or validation error.

use clap::Parser;
use link_optimiser::lagrange::{LagrangeSolver, LinkProblem, TerminationStatus};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod report;

pub use error::{CliError, Result};
use report::OptimisationReport;

/// Lagrangian link latency optimiser
#[derive(Parser)]
#[command(name = "linklat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Minimum data rate floor (R_min)
    min_rate: f64,

    /// Transmission power ceiling (P_max)
    max_power: f64,

    /// Bandwidth ceiling (B_max)
    max_bandwidth: f64,

    /// Rate cost coefficient (a)
    coeff_rate: f64,

    /// Power cost coefficient (b)
    coeff_power: f64,

    /// Bandwidth cost coefficient (c)
    coeff_bandwidth: f64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // The contract is exit status 1 on any argument mismatch, so clap's
    // default exit code cannot be used.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{}", err);
            std::process::exit(1);
        }
    };

    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if let Err(err) = run(&cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let problem = LinkProblem::new(
        cli.min_rate,
        cli.max_power,
        cli.max_bandwidth,
        cli.coeff_rate,
        cli.coeff_power,
        cli.coeff_bandwidth,
    );

    info!(
        "Solving: R_min={} P_max={} B_max={}",
        problem.min_rate, problem.max_power, problem.max_bandwidth
    );

    let allocation = LagrangeSolver::with_defaults().solve(&problem)?;

    match allocation.status {
        TerminationStatus::Converged => {
            info!("Converged after {} iterations", allocation.iterations);
        }
        TerminationStatus::MaxIterationsReached => {
            warn!(
                "Iteration cap reached ({}); reporting best iterate",
                allocation.iterations
            );
        }
    }
    info!(
        "Latency improvement over baseline: {:.2}%",
        allocation.improvement_over(problem.baseline_latency())
    );

    println!("{}", OptimisationReport::from(allocation));
    Ok(())
}
