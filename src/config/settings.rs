//! Application settings loading from config.toml
//!
//! Every section is optional: a missing file or a missing key falls back to the
//! defaults the transport layer has always used (20 debts and 200 clients per page,
//! photos under `uploads/`).

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Page sizes used when a listing command does not specify one
    pub pagination: PaginationSettings,
    /// Where client photos are written
    pub photos: PhotoSettings,
}

/// Default page sizes for paginated listings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaginationSettings {
    /// Rows per page for the debt listing
    pub debts_page_size: u64,
    /// Rows per page for the client listing
    pub clients_page_size: u64,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            debts_page_size: 20,
            clients_page_size: 200,
        }
    }
}

/// Photo storage location
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PhotoSettings {
    /// Directory (relative to the working directory) that receives uploaded photos
    pub directory: PathBuf,
}

impl Default for PhotoSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("uploads"),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A page size is zero
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    debug!("Loading settings from {:?}", path.as_ref());
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let settings: Settings = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if settings.pagination.debts_page_size == 0 || settings.pagination.clients_page_size == 0 {
        return Err(Error::Config {
            message: "Page sizes in [pagination] must be at least 1".to_string(),
        });
    }

    Ok(settings)
}

/// Loads settings from ./config.toml, or returns the defaults when that file is absent
pub fn load_default_settings() -> Result<Settings> {
    let path = Path::new("config.toml");
    if !path.exists() {
        info!("No config.toml found, using default settings.");
        return Ok(Settings::default());
    }
    load_settings(path)
}
