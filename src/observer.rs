//! Receives one notification per simulated day advanced.

use std::io::{self, Write};

use chrono::NaiveDate;

/// Hook the executor calls after each `Advance` step.
///
/// An error ends the run with [CountdownError::Io](crate::error::CountdownError::Io).
pub trait DayObserver {
  fn on_advance(&mut self, from: NaiveDate, to: NaiveDate) -> io::Result<()>;
}

/// Prints `<old-date> -> <new-date>` to stdout.
#[derive(Debug, Default)]
pub struct StdoutObserver;

impl DayObserver for StdoutObserver {
  fn on_advance(&mut self, from: NaiveDate, to: NaiveDate) -> io::Result<()> {
    writeln!(io::stdout().lock(), "{from} -> {to}")
  }
}

/// Discards every transition.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl DayObserver for NoopObserver {
  fn on_advance(&mut self, _from: NaiveDate, _to: NaiveDate) -> io::Result<()> {
    Ok(())
  }
}

/// Keeps every transition in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
  pub transitions: Vec<(NaiveDate, NaiveDate)>,
}

impl DayObserver for RecordingObserver {
  fn on_advance(&mut self, from: NaiveDate, to: NaiveDate) -> io::Result<()> {
    self.transitions.push((from, to));
    Ok(())
  }
}
