//! The record threaded through every step of a countdown run.

use chrono::NaiveDate;
use tracing::instrument;

use super::StateUpdate;
use crate::error::{CountdownError, Result};

/// Identity, birth date and simulated calendar for one run.
///
/// Values are replaced wholesale by [SimulationState::apply]; step functions
/// only ever see an immutable borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
  pub name: String,
  pub surname: String,
  pub birth_date: NaiveDate,
  /// Simulated "current date"; moves forward one day per loop iteration.
  pub today: NaiveDate,
  /// Derived from `birth_date` and `today` on every `ComputeAge` visit.
  pub age: u32,
  /// `None` until the `allowed` branch is taken; written at most once.
  pub message: Option<String>,
}

impl SimulationState {
  /// Creates the initial state (`age = 0`, no message).
  ///
  /// Fails with [CountdownError::InvalidDateInput] when `birth_date` is after `today`.
  pub fn new(
    name: impl Into<String>,
    surname: impl Into<String>,
    birth_date: NaiveDate,
    today: NaiveDate,
  ) -> Result<Self> {
    if birth_date > today {
      return Err(CountdownError::invalid_date(
        birth_date.to_string(),
        format!("birth date is after today ({today})"),
      ));
    }
    Ok(Self {
      name: name.into(),
      surname: surname.into(),
      birth_date,
      today,
      age: 0,
      message: None,
    })
  }

  /// True once the message has been written.
  pub fn has_message(&self) -> bool {
    self.message.is_some()
  }

  /// Merges a partial update into a new state value.
  #[instrument(level = "trace", skip(self, update))]
  pub fn apply(self, update: StateUpdate) -> Result<Self> {
    let StateUpdate {
      age,
      today,
      message,
    } = update;
    let message = match message {
      Some(_) if self.has_message() => return Err(CountdownError::MessageAlreadySet),
      Some(m) => Some(m),
      None => self.message,
    };
    Ok(Self {
      age: age.unwrap_or(self.age),
      today: today.unwrap_or(self.today),
      message,
      ..self
    })
  }
}
