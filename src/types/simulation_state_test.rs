//! Tests for `SimulationState`.

use chrono::NaiveDate;

use super::{SimulationState, StateUpdate};
use crate::error::CountdownError;

fn date(s: &str) -> NaiveDate {
  s.parse().unwrap()
}

fn state() -> SimulationState {
  SimulationState::new("Ada", "Lovelace", date("2008-02-19"), date("2025-02-19")).unwrap()
}

#[test]
fn new_starts_with_zero_age_and_empty_message() {
  let s = state();
  assert_eq!(s.age, 0);
  assert_eq!(s.message, None);
  assert!(!s.has_message());
  assert_eq!(s.today, date("2025-02-19"));
}

#[test]
fn new_accepts_birth_on_today() {
  let s = SimulationState::new("A", "B", date("2024-01-01"), date("2024-01-01")).unwrap();
  assert_eq!(s.birth_date, s.today);
}

#[test]
fn new_rejects_birth_after_today() {
  let err = SimulationState::new("A", "B", date("2030-01-01"), date("2024-01-01")).unwrap_err();
  assert!(matches!(err, CountdownError::InvalidDateInput { .. }));
  assert!(err.to_string().contains("2030-01-01"));
}

#[test]
fn apply_empty_update_keeps_state() {
  let s = state();
  let next = s.clone().apply(StateUpdate::default()).unwrap();
  assert_eq!(next, s);
}

#[test]
fn apply_merges_only_given_fields() {
  let next = state().apply(StateUpdate::age(17)).unwrap();
  assert_eq!(next.age, 17);
  assert_eq!(next.today, date("2025-02-19"));
  let next = next.apply(StateUpdate::today(date("2025-02-20"))).unwrap();
  assert_eq!(next.age, 17);
  assert_eq!(next.today, date("2025-02-20"));
  assert_eq!(next.name, "Ada");
  assert_eq!(next.birth_date, date("2008-02-19"));
}

#[test]
fn message_is_write_once() {
  let next = state().apply(StateUpdate::message("hello")).unwrap();
  assert!(next.has_message());
  let err = next.apply(StateUpdate::message("again")).unwrap_err();
  assert!(matches!(err, CountdownError::MessageAlreadySet));
}

#[test]
fn empty_message_still_counts_as_written() {
  let next = state().apply(StateUpdate::message("")).unwrap();
  assert!(next.has_message());
  assert_eq!(next.message.as_deref(), Some(""));
  let err = next.apply(StateUpdate::message("second")).unwrap_err();
  assert!(matches!(err, CountdownError::MessageAlreadySet));
}
