//! Computes the age from the birth date and the simulated today.

use chrono::{Datelike, NaiveDate};
use tracing::instrument;

use crate::error::{CountdownError, Result};
use crate::types::{SimulationState, StateUpdate};

/// Whole years between `birth_date` and `today`.
///
/// One year is subtracted when today's (month, day) precedes the birthday's
/// within the year. A birthday on Feb 29 is therefore reached on Mar 1 in
/// common years.
pub fn age_between(birth_date: NaiveDate, today: NaiveDate) -> Result<u32> {
  if today < birth_date {
    return Err(CountdownError::invalid_date(
      format!("{birth_date}..{today}"),
      "today precedes birth date",
    ));
  }
  let mut years = today.year() - birth_date.year();
  if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
    years -= 1;
  }
  // today >= birth_date keeps this non-negative
  Ok(years as u32)
}

/// `ComputeAge` step: recomputes the age from scratch.
#[instrument(level = "trace", skip(state), fields(today = %state.today))]
pub fn calculate_age(state: &SimulationState) -> Result<StateUpdate> {
  age_between(state.birth_date, state.today).map(StateUpdate::age)
}
