//! Run configuration: embedded inputs plus optional overrides.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{CountdownError, Result};
use crate::nodes::DEFAULT_MAX_STEPS;

pub const DEFAULT_NAME: &str = "Алексей";
pub const DEFAULT_SURNAME: &str = "Яковенко";
pub const DEFAULT_BIRTH_DATE: &str = "2008-02-19";

pub const ENV_TODAY: &str = "AGE_COUNTDOWN_TODAY";
pub const ENV_MAX_STEPS: &str = "AGE_COUNTDOWN_MAX_STEPS";
pub const ENV_EXECUTION_LOG: &str = "AGE_COUNTDOWN_EXECUTION_LOG";

/// Inputs of one countdown run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  pub name: String,
  pub surname: String,
  pub birth_date: NaiveDate,
  /// Seed for the simulated today.
  pub today: NaiveDate,
  pub max_steps: u64,
  /// Where to write the JSON execution log, if anywhere.
  pub execution_log: Option<PathBuf>,
}

/// Optional values that replace the embedded defaults. Dates are raw ISO-8601 strings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
  pub name: Option<String>,
  pub surname: Option<String>,
  pub birth_date: Option<String>,
  pub today: Option<String>,
  pub max_steps: Option<u64>,
  pub execution_log: Option<PathBuf>,
}

impl ConfigOverrides {
  /// Replaces `today`, `max_steps` and `execution_log` with the matching
  /// environment values where `lookup` finds one. Env vars override flags.
  pub fn with_env(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let max_steps = match lookup(ENV_MAX_STEPS) {
      Some(v) => Some(v.trim().parse::<u64>().map_err(|e| CountdownError::InvalidSetting {
        key: ENV_MAX_STEPS.to_string(),
        reason: e.to_string(),
        value: v,
      })?),
      None => self.max_steps,
    };
    Ok(Self {
      today: lookup(ENV_TODAY).or(self.today),
      max_steps,
      execution_log: lookup(ENV_EXECUTION_LOG)
        .map(PathBuf::from)
        .or(self.execution_log),
      ..self
    })
  }
}

impl RunConfig {
  /// Embedded inputs with today taken from the local wall clock.
  pub fn embedded() -> Result<Self> {
    Self::resolve(ConfigOverrides::default())
  }

  /// Applies `overrides` on top of the embedded inputs.
  ///
  /// Unparsable dates fail with [CountdownError::InvalidDateInput].
  pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
    let birth_date = parse_date(overrides.birth_date.as_deref().unwrap_or(DEFAULT_BIRTH_DATE))?;
    let today = match overrides.today.as_deref() {
      Some(s) => parse_date(s)?,
      None => chrono::Local::now().date_naive(),
    };
    Ok(Self {
      name: overrides.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
      surname: overrides
        .surname
        .unwrap_or_else(|| DEFAULT_SURNAME.to_string()),
      birth_date,
      today,
      max_steps: overrides.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
      execution_log: overrides.execution_log,
    })
  }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
    .map_err(|e| CountdownError::invalid_date(input, e.to_string()))
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use std::collections::HashMap;

  use super::{
    ConfigOverrides, DEFAULT_BIRTH_DATE, ENV_EXECUTION_LOG, ENV_MAX_STEPS, ENV_TODAY, RunConfig,
    parse_date,
  };
  use crate::error::CountdownError;
  use crate::nodes::DEFAULT_MAX_STEPS;

  #[test]
  fn parse_date_accepts_iso() {
    let d = parse_date("2008-02-19").unwrap();
    assert_eq!(d.to_string(), "2008-02-19");
  }

  #[test]
  fn parse_date_rejects_garbage() {
    let err = parse_date("19.02.2008").unwrap_err();
    assert!(matches!(err, CountdownError::InvalidDateInput { ref input, .. } if input == "19.02.2008"));
  }

  #[test]
  fn parse_date_rejects_impossible_day() {
    assert!(parse_date("2025-02-29").is_err());
    assert!(parse_date("2024-02-29").is_ok());
  }

  #[test]
  fn embedded_uses_defaults() {
    let c = RunConfig::embedded().unwrap();
    assert_eq!(c.name, "Алексей");
    assert_eq!(c.surname, "Яковенко");
    assert_eq!(c.birth_date, parse_date(DEFAULT_BIRTH_DATE).unwrap());
    assert_eq!(c.today, chrono::Local::now().date_naive());
    assert_eq!(c.max_steps, DEFAULT_MAX_STEPS);
    assert!(c.execution_log.is_none());
  }

  #[test]
  fn overrides_replace_defaults() {
    let c = RunConfig::resolve(ConfigOverrides {
      name: Some("Ada".to_string()),
      surname: Some("Lovelace".to_string()),
      birth_date: Some("2000-01-01".to_string()),
      today: Some("2023-06-01".to_string()),
      max_steps: Some(10),
      execution_log: Some(PathBuf::from("log.json")),
    })
    .unwrap();
    assert_eq!(c.name, "Ada");
    assert_eq!(c.today, parse_date("2023-06-01").unwrap());
    assert_eq!(c.max_steps, 10);
    assert_eq!(c.execution_log, Some(PathBuf::from("log.json")));
  }

  #[test]
  fn bad_today_override_fails() {
    let err = RunConfig::resolve(ConfigOverrides {
      today: Some("tomorrow".to_string()),
      ..ConfigOverrides::default()
    })
    .unwrap_err();
    assert!(matches!(err, CountdownError::InvalidDateInput { .. }));
  }

  fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |k| map.get(k).cloned()
  }

  #[test]
  fn env_overrides_flags() {
    let flags = ConfigOverrides {
      today: Some("2000-01-01".to_string()),
      max_steps: Some(5),
      execution_log: Some(PathBuf::from("flag.json")),
      ..ConfigOverrides::default()
    };
    let merged = flags
      .with_env(env(&[
        (ENV_TODAY, "2026-02-18"),
        (ENV_MAX_STEPS, "7"),
        (ENV_EXECUTION_LOG, "env.json"),
      ]))
      .unwrap();
    assert_eq!(merged.today.as_deref(), Some("2026-02-18"));
    assert_eq!(merged.max_steps, Some(7));
    assert_eq!(merged.execution_log, Some(PathBuf::from("env.json")));
  }

  #[test]
  fn flags_kept_when_env_unset() {
    let flags = ConfigOverrides {
      name: Some("Ada".to_string()),
      today: Some("2000-01-01".to_string()),
      max_steps: Some(5),
      ..ConfigOverrides::default()
    };
    let merged = flags.with_env(env(&[])).unwrap();
    assert_eq!(merged.name.as_deref(), Some("Ada"));
    assert_eq!(merged.today.as_deref(), Some("2000-01-01"));
    assert_eq!(merged.max_steps, Some(5));
    assert!(merged.execution_log.is_none());
  }

  #[test]
  fn bad_max_steps_env_fails() {
    let err = ConfigOverrides::default()
      .with_env(env(&[(ENV_MAX_STEPS, "many")]))
      .unwrap_err();
    assert!(matches!(err, CountdownError::InvalidSetting { ref key, .. } if key == ENV_MAX_STEPS));
  }
}
