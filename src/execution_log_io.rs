//! Execution log save/load (JSON).

use std::path::Path;

use tracing::instrument;

use crate::types::ExecutionLog;

/// Writes `log` to `path` as pretty JSON, creating the parent directory if needed.
#[instrument(level = "trace", skip(path, log))]
pub fn save_execution_log(path: &Path, log: &ExecutionLog) -> Result<(), std::io::Error> {
  let json = serde_json::to_string_pretty(log)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)
}

/// Loads an execution log from `path`. Returns error if file is missing or invalid JSON.
#[instrument(level = "trace", skip(path))]
pub fn load_execution_log(path: &Path) -> Result<ExecutionLog, std::io::Error> {
  let bytes = std::fs::read(path)?;
  serde_json::from_slice(&bytes)
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
