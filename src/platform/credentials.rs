use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::util::fs::write_string;

/// API key and workspace obtained for the seed account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub workspace_id: String,
}

/// Two-line file holding the api key and the workspace id.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` when the file is absent or does not hold two non-empty lines.
    pub fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(parse(&raw))
    }

    pub fn save(&self, credentials: &Credentials) -> Result<()> {
        write_string(
            &self.path,
            &format!("{}\n{}", credentials.api_key, credentials.workspace_id),
        )
    }
}

fn parse(raw: &str) -> Option<Credentials> {
    let mut lines = raw.trim().lines().map(str::trim);
    let api_key = lines.next().filter(|v| !v.is_empty())?;
    let workspace_id = lines.next().filter(|v| !v.is_empty())?;
    Some(Credentials {
        api_key: api_key.to_string(),
        workspace_id: workspace_id.to_string(),
    })
}
