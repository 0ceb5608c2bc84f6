//! Executor states.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::RouteLabel;

/// Node the executor is about to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
  ComputeAge,
  Advance,
  Done,
}

impl Phase {
  /// Target of the conditional edge leaving `ComputeAge`.
  pub fn after_route(label: RouteLabel) -> Self {
    match label {
      RouteLabel::Allowed => Phase::Done,
      RouteLabel::Forbidden => Phase::Advance,
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, Phase::Done)
  }
}

impl fmt::Display for Phase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Phase::ComputeAge => write!(f, "compute_age"),
      Phase::Advance => write!(f, "advance"),
      Phase::Done => write!(f, "done"),
    }
  }
}
