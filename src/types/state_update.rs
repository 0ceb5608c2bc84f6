//! Partial update returned by a step function.

use chrono::NaiveDate;

/// Fields a step wants changed; `None` leaves the current value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
  pub age: Option<u32>,
  pub today: Option<NaiveDate>,
  pub message: Option<String>,
}

impl StateUpdate {
  pub fn age(age: u32) -> Self {
    Self {
      age: Some(age),
      ..Self::default()
    }
  }

  pub fn today(today: NaiveDate) -> Self {
    Self {
      today: Some(today),
      ..Self::default()
    }
  }

  pub fn message(message: impl Into<String>) -> Self {
    Self {
      message: Some(message.into()),
      ..Self::default()
    }
  }
}
