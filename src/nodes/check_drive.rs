//! Routes on the computed age.

use crate::types::RouteLabel;

/// Minimum age at which the `allowed` branch is taken.
pub const DRIVING_AGE: u32 = 18;

/// `allowed` when `age >= DRIVING_AGE`, else `forbidden`.
pub fn check_drive(age: u32) -> RouteLabel {
  if age >= DRIVING_AGE {
    RouteLabel::Allowed
  } else {
    RouteLabel::Forbidden
  }
}
