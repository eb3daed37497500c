use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "envprofile";
const STORE_FILE: &str = "profiles.json";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    store_file: PathBuf,
}

impl AppPaths {
    /// Resolve the profile store location. An explicit override wins;
    /// otherwise the store lives under the platform config directory.
    /// Nothing is created on disk until the first save.
    pub fn discover(override_file: Option<PathBuf>) -> AppResult<Self> {
        if let Some(store_file) = override_file {
            let config_dir = store_file
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            return Ok(Self {
                config_dir,
                store_file,
            });
        }

        let config_root = dirs::config_dir()
            .ok_or_else(|| AppError::Storage("unable to resolve config directory".to_string()))?;

        let config_dir = config_root.join(APP_DIR);
        let store_file = config_dir.join(STORE_FILE);

        Ok(Self {
            config_dir,
            store_file,
        })
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
