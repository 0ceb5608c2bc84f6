//! Data flowing through a countdown run.
//!
//! Step functions read a [SimulationState] and return a [StateUpdate]; the
//! executor merges updates and follows [Phase] transitions.

mod execution_log;
mod phase;
mod route_label;
mod simulation_state;
#[cfg(test)]
mod simulation_state_test;
mod state_update;

pub use execution_log::{EXECUTION_LOG_VERSION, ExecutionLog, ExecutionStepEntry};
pub use phase::Phase;
pub use route_label::RouteLabel;
pub use simulation_state::SimulationState;
pub use state_update::StateUpdate;
