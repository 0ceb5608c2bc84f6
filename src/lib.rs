//! # age-countdown
//!
//! Advances a simulated "today" one calendar day at a time until a person
//! reaches driving age, then produces a congratulation message.
//!
//! ## Architecture
//!
//! The run is a three-phase state machine (see [nodes]):
//! `compute_age` routes to `done` when the age reaches [nodes::DRIVING_AGE],
//! otherwise to `advance`, which moves the date and loops back. Each step is a
//! pure function from [SimulationState] to [types::StateUpdate]; the loop in
//! [nodes::run_countdown] merges updates and enforces a step ceiling.

pub mod config;
pub mod error;
pub mod execution_log_io;
pub mod nodes;
pub mod observer;
pub mod runner;
pub mod types;

pub use config::{ConfigOverrides, RunConfig};
pub use error::{CountdownError, Result};
pub use nodes::{CountdownResult, LoopOptions, run_countdown};
pub use observer::{DayObserver, NoopObserver, RecordingObserver, StdoutObserver};
pub use runner::run;
pub use types::{SimulationState, StateUpdate};
