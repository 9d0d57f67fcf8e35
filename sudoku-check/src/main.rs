//! Sudoku Check CLI Application
//!
//! A command-line interface for validating the built-in 9×9 Sudoku grid.
//! One concurrent task is run per row and per column (18 in total); once
//! all of them have joined, a single verdict line is printed. The exit
//! code is 0 for both verdicts — only infrastructure failures (task
//! dispatch errors, timeouts) exit non-zero, with a distinct message on
//! stderr.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::process;
use std::time::Duration;
use sudoku_check_lib::{CheckConfig, Grid, GridChecker};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for sudoku-check
#[derive(Parser, Debug)]
#[command(name = "sudoku-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate the built-in Sudoku grid with one concurrent task per row and column")]
#[command(
    long_about = "Validate the row and column uniqueness constraints of the built-in 9x9 Sudoku grid.\n\nSpawns 18 concurrent check tasks (one per row, one per column), waits for all of them, and prints a single verdict line. Box constraints, puzzle input, and solving are out of scope."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Output the full per-line report as JSON
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Show a colored per-line breakdown before the verdict
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Measure and display how long each line check took
    #[arg(long = "timing", help_heading = "Output Format")]
    pub timing: bool,

    /// Abort with an error if the checks have not finished within SECS seconds
    #[arg(long = "timeout", value_name = "SECS", help_heading = "Performance")]
    pub timeout: Option<u64>,

    /// Enable debug logging (honours RUST_LOG for finer control)
    #[arg(short = 'v', long = "verbose", help_heading = "Diagnostics")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Set up logging if verbose
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sudoku-check starting");
    }

    // Run the grid check. Infrastructure failures must never be reported
    // as an "invalid" verdict, so they take the stderr + exit 1 path.
    if let Err(e) = run_grid_check(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    // Can't have multiple output formats
    if args.json && args.pretty {
        return Err("Cannot specify both --json and --pretty output formats".to_string());
    }

    if args.timeout == Some(0) {
        return Err("Timeout must be at least 1 second".to_string());
    }

    Ok(())
}

/// Build CheckConfig from CLI arguments
fn build_config(args: &Args) -> CheckConfig {
    let mut config = CheckConfig::default().with_timing(args.timing);
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    config
}

/// Main grid checking logic
async fn run_grid_check(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::reference();
    let checker = GridChecker::with_config(build_config(&args));

    let start = std::time::Instant::now();
    let report = checker.check_grid(&grid).await?;
    let duration = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.pretty {
        ui::print_report(&report, duration);
        println!("{}", ui::verdict_line(&report));
    } else {
        println!("{}", ui::verdict_line(&report));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sudoku-check"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_validate_args_default_ok() {
        assert!(validate_args(&args(&[])).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_conflicting_formats() {
        let err = validate_args(&args(&["--json", "--pretty"])).unwrap_err();
        assert!(err.contains("--json"));
    }

    #[test]
    fn test_validate_args_rejects_zero_timeout() {
        assert!(validate_args(&args(&["--timeout", "0"])).is_err());
        assert!(validate_args(&args(&["--timeout", "5"])).is_ok());
    }

    #[test]
    fn test_build_config_maps_flags() {
        let config = build_config(&args(&["--timing", "--timeout", "3"]));
        assert!(config.timing);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));

        let plain = build_config(&args(&[]));
        assert!(!plain.timing);
        assert_eq!(plain.timeout, None);
    }
}
