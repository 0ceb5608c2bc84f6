//! Final message for the `allowed` branch.

use tracing::instrument;

use crate::types::{SimulationState, StateUpdate};

/// Congratulation line naming the person and their age.
pub fn success_message(name: &str, surname: &str, age: u32) -> String {
  format!("Congrats, {name} {surname}! You are already {age} years old and you can drive!")
}

/// `allowed` branch step: writes the message.
#[instrument(level = "trace", skip(state))]
pub fn generate_success_message(state: &SimulationState) -> StateUpdate {
  StateUpdate::message(success_message(&state.name, &state.surname, state.age))
}
