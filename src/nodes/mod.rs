//! Step functions of the countdown graph and the loop that drives them.
//!
//! ```text
//! start -> compute_age -(allowed)-> success_message -> done
//!               ^    \
//!               |     (forbidden)
//!               |      v
//!               +--- advance_date
//! ```

pub mod advance_date;
pub mod calculate_age;
pub mod check_drive;
pub mod execution_loop;
pub mod success_message;

pub use advance_date::{advance_date, next_day};
pub use calculate_age::{age_between, calculate_age};
pub use check_drive::{DRIVING_AGE, check_drive};
pub use execution_loop::{
  CountdownResult, DEFAULT_MAX_STEPS, LoopFailure, LoopOptions, run_countdown,
};
pub use success_message::{generate_success_message, success_message};
