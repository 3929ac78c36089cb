//! u-evo CLI: evolves TA-to-section assignments and writes the Pareto front.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use u_evo::assignment::{self, Assignment, AssignmentData};
use u_evo::evo::{Evo, EvoConfig, EvoObserver, EvolveSummary, StatusReport};
use u_evo::report::write_summary_file;

#[derive(Parser)]
#[command(name = "u-evo")]
#[command(about = "Multi-objective evolutionary TA assignment", long_about = None)]
struct Cli {
    /// Section table (CSV with `daytime` and `min_ta` columns)
    #[arg(long, default_value = "sections.csv")]
    sections: PathBuf,

    /// TA table (CSV with `max_assigned` and preference columns `0..`)
    #[arg(long, default_value = "tas.csv")]
    tas: PathBuf,

    /// Number of agent invocations
    #[arg(long, default_value = "100000")]
    iterations: usize,

    /// Prune to the Pareto front every N iterations
    #[arg(long, default_value = "200")]
    dominance_interval: usize,

    /// Print a status report every N iterations
    #[arg(long, default_value = "1000")]
    status_interval: usize,

    /// Wall-clock limit in seconds
    #[arg(long, default_value = "600")]
    time_limit: u64,

    /// Random seed; omit for an OS-seeded run
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a cell of the starting assignment is set
    #[arg(long, default_value_t = 1.0 / 6.0, value_parser = parse_density)]
    density: f64,

    /// Output path for the summary table
    #[arg(long, default_value = "summary_table.csv")]
    summary: PathBuf,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("density must be between 0 and 1, got {s}"))
    }
}

/// Prints status reports to stdout.
struct PrintObserver;

impl EvoObserver for PrintObserver {
    fn on_status(&mut self, report: &StatusReport) {
        println!("{report}");
    }

    fn on_finish(&mut self, summary: &EvolveSummary) {
        info!(
            "stopped after {} iterations ({:?}), {} solutions retained",
            summary.iterations, summary.stop_reason, summary.population_size
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let data = AssignmentData::from_csv_paths(&cli.sections, &cli.tas).with_context(|| {
        format!(
            "failed to load {} and {}",
            cli.sections.display(),
            cli.tas.display()
        )
    })?;
    let data = Arc::new(data);
    info!("loaded {} TAs and {} sections", data.n_tas(), data.n_sections());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let start = assignment::seed(&data, cli.density, &mut rng);

    let mut evo: Evo<Assignment> = match cli.seed {
        Some(seed) => Evo::seeded(seed.wrapping_add(1)),
        None => Evo::new(),
    };
    assignment::register_all(&mut evo, Arc::clone(&data))?;
    evo.insert(start);

    let config = EvoConfig::new(cli.iterations)
        .with_dominance_interval(cli.dominance_interval)
        .with_status_interval(cli.status_interval)
        .with_time_limit_secs(cli.time_limit);
    evo.evolve_with_observer(&config, &mut PrintObserver)?;

    write_summary_file(&evo, &cli.summary)
        .with_context(|| format!("failed to write {}", cli.summary.display()))?;
    for (evaluation, solution) in evo.front() {
        println!("{evaluation}");
        println!("{solution}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_bounds() {
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("NaN").is_err());
        assert!(parse_density("inf").is_err());
        assert!(parse_density("-0.1").is_err());
        assert!(parse_density("dense").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["u-evo"]).unwrap();
        assert_eq!(cli.iterations, 100_000);
        assert_eq!(cli.dominance_interval, 200);
        assert_eq!(cli.status_interval, 1000);
        assert_eq!(cli.summary, PathBuf::from("summary_table.csv"));
        assert!((cli.density - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_cli_rejects_nan_density() {
        assert!(Cli::try_parse_from(["u-evo", "--density", "NaN"]).is_err());
    }
}
