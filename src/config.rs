use crate::persistence::{find_local_data_dir, home_data_dir, DATA_FILE_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Where the progress file comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// `--file` or `DSA_PROGRESS_FILE`
    Explicit,
    /// A `.dsa-progress` directory in the current directory or above
    Local,
    /// `~/.dsa-progress`
    Home,
}

/// Settings resolved once at startup
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub source: PathSource,
}

impl Settings {
    /// Resolve settings relative to the process working directory
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let cwd = env::current_dir().context("Could not determine current directory")?;
        Self::resolve_from(explicit, &cwd)
    }

    /// Resolve settings: explicit path first, then a local data directory, then home
    pub fn resolve_from(explicit: Option<PathBuf>, cwd: &Path) -> Result<Self> {
        let (data_file, source) = match explicit {
            Some(path) if path.is_relative() => (cwd.join(path), PathSource::Explicit),
            Some(path) => (path, PathSource::Explicit),
            None => match find_local_data_dir(cwd) {
                Some(dir) => (dir.join(DATA_FILE_NAME), PathSource::Local),
                None => (home_data_dir()?.join(DATA_FILE_NAME), PathSource::Home),
            },
        };

        let log_file = data_file
            .parent()
            .map(|dir| dir.join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME));

        Ok(Self {
            data_file,
            log_file,
            source,
        })
    }
}
