use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};

/// A named set of environment variables. Iteration follows insertion order,
/// and overwriting a key keeps its original position.
pub type Profile = IndexMap<String, String>;

/// The full on-disk collection of profiles. Serializes as a flat
/// `{ "name": { "VAR": "value" } }` mapping with no envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    profiles: IndexMap<String, Profile>,
}

impl Document {
    pub fn create_profile(&mut self, name: &str) -> AppResult<()> {
        validate_profile_name(name)?;
        if self.profiles.contains_key(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }

        self.profiles.insert(name.to_string(), Profile::new());
        Ok(())
    }

    pub fn delete_profile(&mut self, name: &str) -> AppResult<()> {
        self.profiles
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))
    }

    pub fn set_variable(&mut self, profile: &str, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        let vars = self
            .profiles
            .get_mut(profile)
            .ok_or_else(|| AppError::ProfileNotFound(profile.to_string()))?;

        vars.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn unset_variable(&mut self, profile: &str, key: &str) -> AppResult<()> {
        let vars = self
            .profiles
            .get_mut(profile)
            .ok_or_else(|| AppError::ProfileNotFound(profile.to_string()))?;

        if vars.shift_remove(key).is_none() {
            return Err(AppError::KeyNotFound {
                profile: profile.to_string(),
                key: key.to_string(),
            });
        }

        Ok(())
    }

    pub fn profile(&self, name: &str) -> AppResult<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| AppError::ProfileNotFound(name.to_string()))
    }

    /// Profile names sorted for deterministic display.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn validate_profile_name(name: &str) -> AppResult<()> {
    if name.is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(AppError::InvalidInput(format!(
            "profile name '{name}' must not contain whitespace"
        )));
    }

    Ok(())
}

// Keys are restricted to shell identifiers so that every stored entry can be
// emitted as a valid `export` assignment.
fn validate_key(key: &str) -> AppResult<()> {
    let starts_ok = key
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let rest_ok = key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !starts_ok || !rest_ok {
        return Err(AppError::InvalidInput(format!(
            "'{key}' is not a valid environment variable name"
        )));
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document. A missing file is an empty document; anything
    /// else that deviates from the mapping-of-mappings-of-strings shape is a
    /// storage error, never silently coerced.
    pub fn load(&self) -> AppResult<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|err| {
            AppError::Storage(format!("failed to read {}: {err}", self.path.display()))
        })?;

        let document = serde_json::from_str(&raw).map_err(|err| {
            AppError::Storage(format!(
                "{} is not a valid profile store: {err}",
                self.path.display()
            ))
        })?;

        Ok(document)
    }

    /// Write the full document atomically: serialize to a temp file in the
    /// destination directory, then rename over the store so a crash never
    /// leaves a truncated file.
    pub fn save(&self, document: &Document) -> AppResult<()> {
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        fs::create_dir_all(parent).map_err(|err| {
            AppError::Storage(format!("failed to create {}: {err}", parent.display()))
        })?;

        let payload = serde_json::to_string_pretty(document)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|err| {
            AppError::Storage(format!(
                "failed to create temp file in {}: {err}",
                parent.display()
            ))
        })?;
        tmp.write_all(payload.as_bytes()).map_err(|err| {
            AppError::Storage(format!("failed to write {}: {err}", self.path.display()))
        })?;
        tmp.persist(&self.path).map_err(|err| {
            AppError::Storage(format!("failed to replace {}: {err}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }
}
