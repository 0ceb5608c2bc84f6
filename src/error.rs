//! Error taxonomy for a countdown run.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::SimulationState;

/// Result type for countdown operations.
pub type Result<T> = std::result::Result<T, CountdownError>;

/// Errors that can end a countdown run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CountdownError {
  /// A date could not be parsed, or the birth date lies after the simulated today.
  #[error("invalid date input '{input}': {reason}")]
  InvalidDateInput {
    /// The offending input as given (or the formatted date pair).
    input: String,
    /// Why the input was rejected.
    reason: String,
  },

  /// The executor made `limit` steps without reaching `Done`.
  #[error("step limit exceeded: {limit} steps without reaching done (simulated today {})", .last_state.today)]
  StepLimitExceeded {
    /// Configured ceiling.
    limit: u64,
    /// State after the last executed step.
    last_state: Box<SimulationState>,
  },

  /// Calendar arithmetic left the range chrono can represent.
  #[error("date out of range: no day follows {date}")]
  DateOutOfRange {
    /// The date that could not be advanced.
    date: NaiveDate,
  },

  /// A setting read from the environment could not be parsed.
  #[error("invalid value '{value}' for {key}: {reason}")]
  InvalidSetting {
    /// Environment variable name.
    key: String,
    value: String,
    reason: String,
  },

  /// A second message was written to a state that already holds one.
  #[error("message already set")]
  MessageAlreadySet,

  /// Writing the day trace or the execution log failed.
  #[error("I/O: {0}")]
  Io(#[from] std::io::Error),
}

impl CountdownError {
  pub(crate) fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidDateInput {
      input: input.into(),
      reason: reason.into(),
    }
  }
}
