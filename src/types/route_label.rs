//! Branch label produced by the driving-age router.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which edge leaves `ComputeAge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteLabel {
  Allowed,
  Forbidden,
}

impl fmt::Display for RouteLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RouteLabel::Allowed => write!(f, "allowed"),
      RouteLabel::Forbidden => write!(f, "forbidden"),
    }
  }
}
