//! DTOs for the execution log: one entry per executor step, for debugging.
//!
//! Built from the [SimulationState](super::SimulationState) after each step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Phase, RouteLabel, SimulationState};

/// Current execution log format version.
pub const EXECUTION_LOG_VERSION: u32 = 1;

/// One recorded step in the execution log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStepEntry {
  /// 1-based step index.
  pub step: u64,
  /// Phase that was executed.
  pub phase: Phase,
  /// Simulated today after the step.
  pub today: NaiveDate,
  /// Age after the step.
  pub age: u32,
  /// Router decision, only for `compute_age` steps.
  pub route: Option<RouteLabel>,
  /// Phase selected for the next step.
  pub next_phase: Phase,
}

impl ExecutionStepEntry {
  /// Build a step entry from the state produced by the step.
  pub fn new(
    step: u64,
    phase: Phase,
    state: &SimulationState,
    route: Option<RouteLabel>,
    next_phase: Phase,
  ) -> Self {
    Self {
      step,
      phase,
      today: state.today,
      age: state.age,
      route,
      next_phase,
    }
  }
}

/// Root structure for the execution log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLog {
  /// Log format version.
  pub version: u32,
  pub name: String,
  pub surname: String,
  pub birth_date: NaiveDate,
  /// RFC 3339 timestamp when the run started.
  pub started_at: String,
  /// RFC 3339 timestamp when the run finished.
  pub finished_at: Option<String>,
  /// `success` or `step_limit_exceeded`.
  pub final_status: String,
  /// Recorded steps in order.
  pub steps: Vec<ExecutionStepEntry>,
}

impl ExecutionLog {
  /// Starts an empty log for `state`, stamped with the current wall-clock time.
  pub fn start(state: &SimulationState) -> Self {
    Self {
      version: EXECUTION_LOG_VERSION,
      name: state.name.clone(),
      surname: state.surname.clone(),
      birth_date: state.birth_date,
      started_at: chrono::Utc::now().to_rfc3339(),
      finished_at: None,
      final_status: String::new(),
      steps: vec![],
    }
  }

  /// Marks the log finished with `status` and the given steps.
  pub fn finish(mut self, status: impl Into<String>, steps: Vec<ExecutionStepEntry>) -> Self {
    self.finished_at = Some(chrono::Utc::now().to_rfc3339());
    self.final_status = status.into();
    self.steps = steps;
    self
  }
}
