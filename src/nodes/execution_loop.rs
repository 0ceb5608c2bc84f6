//! Countdown execution loop - drives the step functions until `Done`.

use tracing::{info, instrument, trace};

use crate::error::{CountdownError, Result};
use crate::nodes::advance_date::advance_date;
use crate::nodes::calculate_age::calculate_age;
use crate::nodes::check_drive::check_drive;
use crate::nodes::success_message::generate_success_message;
use crate::observer::DayObserver;
use crate::types::{ExecutionStepEntry, Phase, SimulationState};

/// Default step ceiling; each simulated day costs two steps.
pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Knobs for [run_countdown].
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
  /// Maximum number of `ComputeAge`/`Advance` visits before failing.
  pub max_steps: u64,
  /// When true, one [ExecutionStepEntry] is kept per step.
  pub record_steps: bool,
}

impl Default for LoopOptions {
  fn default() -> Self {
    Self {
      max_steps: DEFAULT_MAX_STEPS,
      record_steps: false,
    }
  }
}

/// Final result of a countdown run.
#[derive(Debug, Clone)]
pub struct CountdownResult {
  /// Terminal state; `message` is set.
  pub state: SimulationState,
  /// Number of executor steps taken.
  pub steps: u64,
  /// Number of simulated days advanced.
  pub days_advanced: u64,
  /// Per-step entries when [LoopOptions::record_steps] is set.
  pub step_log: Option<Vec<ExecutionStepEntry>>,
}

/// Failure of [run_countdown] together with whatever steps were recorded.
#[derive(Debug)]
pub struct LoopFailure {
  pub error: CountdownError,
  pub step_log: Option<Vec<ExecutionStepEntry>>,
}

impl From<LoopFailure> for CountdownError {
  fn from(f: LoopFailure) -> Self {
    f.error
  }
}

/// Runs the `ComputeAge -> (Done | Advance -> ComputeAge)` cycle on `state`.
///
/// The ceiling is checked before every visit; reaching `Done` does not cost a step.
#[instrument(level = "trace", skip(state, observer), fields(today = %state.today))]
pub fn run_countdown(
  state: SimulationState,
  options: LoopOptions,
  observer: &mut dyn DayObserver,
) -> std::result::Result<CountdownResult, LoopFailure> {
  let mut step_log = options.record_steps.then(Vec::new);
  match drive(state, options, observer, &mut step_log) {
    Ok((state, steps, days_advanced)) => Ok(CountdownResult {
      state,
      steps,
      days_advanced,
      step_log,
    }),
    Err(error) => Err(LoopFailure { error, step_log }),
  }
}

fn drive(
  mut state: SimulationState,
  options: LoopOptions,
  observer: &mut dyn DayObserver,
  step_log: &mut Option<Vec<ExecutionStepEntry>>,
) -> Result<(SimulationState, u64, u64)> {
  let mut phase = Phase::ComputeAge;
  let mut steps = 0u64;
  let mut days_advanced = 0u64;
  info!(birth_date = %state.birth_date, today = %state.today, "countdown starting");

  while !phase.is_terminal() {
    if steps >= options.max_steps {
      return Err(CountdownError::StepLimitExceeded {
        limit: options.max_steps,
        last_state: Box::new(state),
      });
    }
    steps += 1;
    trace!(step = steps, %phase, "executing phase");

    let (next, route) = match phase {
      Phase::ComputeAge => {
        let update = calculate_age(&state)?;
        state = state.apply(update)?;
        let route = check_drive(state.age);
        let next = Phase::after_route(route);
        if next.is_terminal() {
          let update = generate_success_message(&state);
          state = state.apply(update)?;
        }
        (next, Some(route))
      }
      Phase::Advance => {
        let from = state.today;
        let update = advance_date(&state)?;
        state = state.apply(update)?;
        days_advanced += 1;
        observer.on_advance(from, state.today)?;
        (Phase::ComputeAge, None)
      }
      Phase::Done => break,
    };

    if let Some(log) = step_log.as_mut() {
      log.push(ExecutionStepEntry::new(steps, phase, &state, route, next));
    }
    phase = next;
  }

  info!(steps, days_advanced, today = %state.today, age = state.age, "countdown complete");
  Ok((state, steps, days_advanced))
}
