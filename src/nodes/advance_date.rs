//! Moves the simulated today forward by one calendar day.

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::error::{CountdownError, Result};
use crate::types::{SimulationState, StateUpdate};

/// The calendar day after `date`.
pub fn next_day(date: NaiveDate) -> Result<NaiveDate> {
  date
    .succ_opt()
    .ok_or(CountdownError::DateOutOfRange { date })
}

/// `Advance` step.
#[instrument(level = "trace", skip(state))]
pub fn advance_date(state: &SimulationState) -> Result<StateUpdate> {
  let from = state.today;
  let to = next_day(from)?;
  debug!(%from, %to, "advanced simulated date");
  Ok(StateUpdate::today(to))
}
