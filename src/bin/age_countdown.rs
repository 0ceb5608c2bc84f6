//! CLI: count simulated days until the configured person may drive.
//!
//! With no arguments the embedded person is used and the simulation starts
//! from the real current date. Each simulated day prints `<old> -> <new>`;
//! the run ends with the congratulation message and the date it was reached.
//!
//! Usage: `age_countdown [OPTIONS]`
//! Example: age_countdown --birth-date 2008-02-19 --today 2025-02-19
//!
//! Set RUST_LOG=age_countdown=debug to trace every date transition on stderr.

use clap::Parser;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use age_countdown::{ConfigOverrides, CountdownResult, RunConfig, StdoutObserver, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Count simulated days until a person reaches driving age.
///
/// Environment variables (see --help) override the matching flags.
#[derive(Parser, Debug)]
#[command(name = "age_countdown")]
#[command(after_help = r#"Environment variables (override --today, --max-steps and --execution-log when set):
  AGE_COUNTDOWN_TODAY           Seed for the simulated today (YYYY-MM-DD).
  AGE_COUNTDOWN_MAX_STEPS       Maximum number of executor steps.
  AGE_COUNTDOWN_EXECUTION_LOG   Path for the JSON execution log.

Examples:
  age_countdown
  age_countdown --name Ada --surname Lovelace --birth-date 2008-02-19 --today 2025-02-19
  age_countdown --execution-log .countdown/execution.log.json"#)]
struct Args {
  /// First name used in the final message.
  #[arg(long)]
  name: Option<String>,

  /// Surname used in the final message.
  #[arg(long)]
  surname: Option<String>,

  /// Birth date (YYYY-MM-DD).
  #[arg(long, value_name = "DATE")]
  birth_date: Option<String>,

  /// Seed for the simulated today (YYYY-MM-DD). Overridden by AGE_COUNTDOWN_TODAY if set. Default: the real current date.
  #[arg(long, value_name = "DATE")]
  today: Option<String>,

  /// Maximum number of executor steps before failing. Overridden by AGE_COUNTDOWN_MAX_STEPS if set.
  #[arg(long, value_name = "N")]
  max_steps: Option<u64>,

  /// Write a JSON log of every executor step to this path. Overridden by AGE_COUNTDOWN_EXECUTION_LOG if set.
  #[arg(long, value_name = "PATH")]
  execution_log: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
  fn from(args: Args) -> Self {
    Self {
      name: args.name,
      surname: args.surname,
      birth_date: args.birth_date,
      today: args.today,
      max_steps: args.max_steps,
      execution_log: args.execution_log,
    }
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  info!(?args, "age_countdown starting");

  // Env vars override flags.
  let config = match ConfigOverrides::from(args)
    .with_env(|key| env::var(key).ok())
    .and_then(RunConfig::resolve)
  {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  let result = match run(&config, &mut StdoutObserver) {
    Ok(r) => r,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  info!(steps = result.steps, days = result.days_advanced, "countdown completed");
  if let Err(e) = print_result(&result) {
    eprintln!("Error writing result: {}", e);
    process::exit(1);
  }
}

fn print_result(result: &CountdownResult) -> io::Result<()> {
  let mut out = io::stdout().lock();
  writeln!(out, "{}", result.state.message.as_deref().unwrap_or_default())?;
  writeln!(out, "Date when allowed to drive: {}", result.state.today)?;
  out.flush()
}
