use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub fn ensure_dir(path: &Path) -> Result<()> {
  fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

pub fn write_string(path: &Path, content: &str) -> Result<()> {
  if let Some(parent) = path.parent() {
    ensure_dir(parent)?;
  }
  fs::write(path, content).map_err(|e| Error::io(path, e))
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
  let payload = serde_json::to_string_pretty(value)?;
  write_string(path, &payload)
}

/// Reads a JSON document, mapping a missing file to `Error::MissingData`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
  if !path.exists() {
    return Err(Error::MissingData(path.to_path_buf()));
  }
  let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
  Ok(serde_json::from_str(&raw)?)
}
