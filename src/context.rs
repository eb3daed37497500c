use std::path::PathBuf;

use crate::config::AppPaths;
use crate::error::AppResult;
use crate::output::Output;
use crate::store::ProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub store: ProfileStore,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(file: Option<PathBuf>, json: bool) -> AppResult<Self> {
        let paths = AppPaths::discover(file)?;
        let store = ProfileStore::new(paths.store_file().to_path_buf());
        let output = Output::new(json);

        Ok(Self {
            paths,
            store,
            output,
        })
    }
}
