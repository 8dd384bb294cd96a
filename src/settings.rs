use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::{
    APP_DIR_NAME, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_LOG_FILE,
    DEFAULT_TICK_INTERVAL_MS, SETTINGS_FILE_NAME,
};
use crate::grid::GridSize;

/// Errors raised while assembling session settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid must be at least 3x3, got {cols}x{rows}")]
    GridTooSmall { cols: u16, rows: u16 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Optional values read from the JSON settings file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub cols: Option<u16>,
    pub rows: Option<u16>,
    pub tick_ms: Option<u64>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Command-line overrides; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cols: Option<u16>,
    pub rows: Option<u16>,
    pub tick_ms: Option<u64>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub grid: GridSize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Settings {
    /// Merges defaults, the settings file and command-line overrides, in
    /// increasing precedence.
    pub fn resolve(file: SettingsFile, overrides: Overrides) -> Result<Self, SettingsError> {
        let cols = overrides.cols.or(file.cols).unwrap_or(DEFAULT_GRID_WIDTH);
        let rows = overrides.rows.or(file.rows).unwrap_or(DEFAULT_GRID_HEIGHT);
        let tick_ms = overrides
            .tick_ms
            .or(file.tick_ms)
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS);

        if tick_ms == 0 {
            return Err(SettingsError::ZeroTickInterval);
        }

        Ok(Self {
            grid: GridSize::new(cols, rows)?,
            tick_interval: Duration::from_millis(tick_ms),
            seed: overrides.seed.or(file.seed),
            log_file: overrides
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        })
    }
}

/// Returns the platform-correct default settings file path.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads the settings file.
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file yields empty settings.
pub fn load_settings_file(path: Option<&Path>) -> Result<SettingsFile, SettingsError> {
    match path {
        Some(path) => read_settings_file(path),
        None => {
            let path = default_settings_path();
            match read_settings_file(&path) {
                Err(SettingsError::Read { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    Ok(SettingsFile::default())
                }
                other => other,
            }
        }
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
