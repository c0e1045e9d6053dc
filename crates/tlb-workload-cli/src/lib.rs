//! TLB workload CLI - synthetic address traces for cache/TLB simulators
//!
//! Prints one trace per selected workload to stdout. Logs go to stderr so
//! the traces can be piped straight into a simulator.

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tlb_workload::{WorkloadConfig, WorkloadKind, WorkloadSuite};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod output;

pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// TLB workload generator
#[derive(Parser, Debug)]
#[command(name = "tlb-workload")]
#[command(about = "Generate synthetic memory-address workloads for cache/TLB simulation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path (TOML, JSON or YAML)
    #[arg(short, long, env = "TLB_WORKLOAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Addresses per workload [default: from configuration, 5]
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for randomized workloads
    #[arg(short, long, env = "TLB_WORKLOAD_SEED")]
    pub seed: Option<u64>,

    /// Workloads to generate (repeatable) [default: all]
    #[arg(short, long, value_enum)]
    pub workload: Vec<WorkloadArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Log level
    #[arg(long, env = "TLB_WORKLOAD_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "TLB_WORKLOAD_LOG_JSON")]
    pub log_json: bool,
}

/// Workload selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WorkloadArg {
    /// Sequential segment walk
    #[value(alias = "ml")]
    MachineLearning,
    /// Reuse-weighted asset accesses
    #[value(alias = "games")]
    AaaGames,
    /// Round-robin service segments
    #[value(alias = "microservice")]
    StatelessMicroservice,
}

impl From<WorkloadArg> for WorkloadKind {
    fn from(arg: WorkloadArg) -> Self {
        match arg {
            WorkloadArg::MachineLearning => WorkloadKind::MachineLearning,
            WorkloadArg::AaaGames => WorkloadKind::AaaGames,
            WorkloadArg::StatelessMicroservice => WorkloadKind::StatelessMicroservice,
        }
    }
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    init_tracing(&cli.log_level, cli.log_json);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

/// Load configuration, apply overrides, generate and render traces.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> CliResult<()> {
    let mut config = WorkloadConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(count) = cli.count {
        config.count = count;
    }

    let kinds: Vec<WorkloadKind> = cli.workload.iter().copied().map(Into::into).collect();
    let mut suite = WorkloadSuite::from_config(&config, &kinds)?;
    let traces = suite.run(config.count);

    output::render(&traces, cli.output, out)
}

fn init_tracing(level: &str, json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.to_string().into());

    // Ignore the error when a subscriber is already installed (repeated runs).
    let _ = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("tlb-workload").chain(args.iter().copied()))
    }

    fn execute_to_string(args: &[&str]) -> String {
        let mut buf = Vec::new();
        execute(&cli(args), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn parses_defaults() {
        let cli = cli(&[]);
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(cli.workload.is_empty());
        assert_eq!(cli.count, None);
        assert!(!cli.log_json);
    }

    #[test]
    fn parses_repeated_workloads_and_aliases() {
        let cli = cli(&["-w", "ml", "--workload", "stateless-microservice", "-o", "json"]);
        assert_eq!(
            cli.workload,
            vec![WorkloadArg::MachineLearning, WorkloadArg::StatelessMicroservice]
        );
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn default_run_prints_three_labelled_lines() {
        let text = execute_to_string(&["--seed", "1"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Machine Learning Workload: 0x00004000 0x00005000 0x00006000 0x00007000 0x00008000"
        );
        assert!(lines[1].starts_with("AAA Games Workload: 0x"));
        assert_eq!(lines[1].split(' ').count(), 3 + 5);
        assert!(lines[2].starts_with("Stateless Microservice Workload: 0x00000801"));
    }

    #[test]
    fn count_and_selection_override_config() {
        let text = execute_to_string(&["-w", "microservice", "-n", "2"]);
        assert_eq!(text, "Stateless Microservice Workload: 0x00000801 0x00001003\n");
    }

    #[test]
    fn seed_makes_games_reproducible() {
        let args = ["-w", "games", "-s", "77", "-n", "20"];
        assert_eq!(execute_to_string(&args), execute_to_string(&args));
    }

    #[test]
    fn invalid_config_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[microservice]\nservice_count = 0\n").unwrap();

        let mut buf = Vec::new();
        let err = execute(&cli(&["-c", path.to_str().unwrap()]), &mut buf).unwrap_err();
        assert!(matches!(err, CliError::Workload(_)));
        assert!(buf.is_empty());
    }
}
