//! Runs a countdown from a [RunConfig]: build the state, drive the loop,
//! write the execution log when one is configured.

use tracing::{info, instrument, warn};

use crate::config::RunConfig;
use crate::error::{CountdownError, Result};
use crate::execution_log_io::save_execution_log;
use crate::nodes::{CountdownResult, LoopOptions, run_countdown};
use crate::observer::DayObserver;
use crate::types::{ExecutionLog, SimulationState};

/// Final status recorded in the execution log for a run outcome.
pub(crate) fn final_status(error: Option<&CountdownError>) -> &'static str {
  match error {
    None => "success",
    Some(CountdownError::StepLimitExceeded { .. }) => "step_limit_exceeded",
    Some(_) => "error",
  }
}

/// Validates the inputs and runs the countdown to completion.
///
/// Fails with [CountdownError::InvalidDateInput] before any step when the
/// birth date is after `config.today`.
#[instrument(level = "trace", skip(config, observer))]
pub fn run(config: &RunConfig, observer: &mut dyn DayObserver) -> Result<CountdownResult> {
  let state = SimulationState::new(
    config.name.clone(),
    config.surname.clone(),
    config.birth_date,
    config.today,
  )?;
  let log = config
    .execution_log
    .as_ref()
    .map(|_| ExecutionLog::start(&state));
  let options = LoopOptions {
    max_steps: config.max_steps,
    record_steps: log.is_some(),
  };

  let outcome = run_countdown(state, options, observer);

  if let (Some(path), Some(log)) = (config.execution_log.as_deref(), log) {
    let (status, steps) = match &outcome {
      Ok(r) => (final_status(None), r.step_log.clone()),
      Err(f) => (final_status(Some(&f.error)), f.step_log.clone()),
    };
    let log = log.finish(status, steps.unwrap_or_default());
    match save_execution_log(path, &log) {
      Ok(()) => info!(path = %path.display(), steps = log.steps.len(), "execution log written"),
      Err(e) if outcome.is_err() => {
        warn!(path = %path.display(), error = %e, "could not write execution log")
      }
      Err(e) => return Err(e.into()),
    }
  }

  outcome.map_err(Into::into)
}
