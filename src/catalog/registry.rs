use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::catalog::defaults::default_catalog;
use crate::catalog::store::PresetCatalog;
use crate::config::ServerLayout;
use crate::parsing::metadata::{resolve_display_name, MetadataError};

/// Status message shown after a preset was removed
pub const DELETE_SUCCESS_MESSAGE: &str = "Weather preset successfully deleted!";

/// Status message shown when a preset could not be removed
pub const DELETE_FAILURE_MESSAGE: &str =
    "Sorry, weather preset could not be deleted. Are you sure it was installed?";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to list presets in {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The preset was in the catalog and its directory is gone
    Deleted,
    /// No preset with that key is known
    NotFound,
    /// The preset exists but its directory could not be removed
    RemovalFailed(String),
}

impl DeleteOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Deleted)
    }

    /// User-facing status message
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.is_success() {
            DELETE_SUCCESS_MESSAGE
        } else {
            DELETE_FAILURE_MESSAGE
        }
    }
}

/// Weather presets installed under a single base directory.
///
/// The registry keeps no state besides its base path. Every call reads the
/// filesystem again, so uploads and deletions made elsewhere are picked up on
/// the next listing.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    base_dir: PathBuf,
}

impl PresetRegistry {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Registry for the weather directory of a server installation
    #[must_use]
    pub fn for_server(layout: &ServerLayout) -> Self {
        Self::new(layout.weather_dir())
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Build the catalog: built-in presets overlaid with installed ones.
    ///
    /// A missing base directory yields the built-in set. Installed presets
    /// replace built-ins with the same key. The result is never empty.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Io` if the base directory exists but cannot be
    /// enumerated, or `RegistryError::Metadata` if any preset carries a
    /// `weather.ini` that cannot be parsed.
    pub fn list_presets(&self) -> Result<PresetCatalog, RegistryError> {
        let mut catalog = default_catalog();

        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "Preset directory {} does not exist, using built-in presets",
                    self.base_dir.display()
                );
                return Ok(catalog);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        for entry in entries {
            let entry = entry.map_err(|e| self.io_error(e))?;
            let file_type = entry.file_type().map_err(|e| self.io_error(e))?;
            if !file_type.is_dir() {
                continue;
            }

            let Some(key) = entry.file_name().to_str().map(ToString::to_string) else {
                warn!(
                    "Skipping preset directory with non UTF-8 name: {:?}",
                    entry.file_name()
                );
                continue;
            };

            let name = resolve_display_name(&self.base_dir, &key)?.unwrap_or_else(|| {
                debug!("Preset '{}' has no display name, using its key", key);
                key.clone()
            });

            debug!("Discovered preset '{}' ({})", key, name);
            catalog.insert(key, name);
        }

        if catalog.is_empty() {
            return Ok(default_catalog());
        }

        Ok(catalog)
    }

    /// Display name from the preset's `weather.ini`, if it declares one
    ///
    /// # Errors
    ///
    /// Returns `MetadataError` if the file exists but is unreadable or malformed.
    pub fn resolve_display_name(&self, key: &str) -> Result<Option<String>, MetadataError> {
        resolve_display_name(&self.base_dir, key)
    }

    /// Remove the preset `key` and everything inside its directory.
    ///
    /// The key is checked against a freshly built catalog first, so only known
    /// presets are ever touched on disk. A known key without a directory (a
    /// built-in that was never installed) counts as removed.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` only when the catalog itself cannot be built.
    /// Unknown keys and failed removals are reported through `DeleteOutcome`.
    pub fn delete_preset(&self, key: &str) -> Result<DeleteOutcome, RegistryError> {
        let catalog = self.list_presets()?;

        if !catalog.contains(key) {
            debug!("Preset '{}' is not installed", key);
            return Ok(DeleteOutcome::NotFound);
        }

        let path = self.base_dir.join(key);
        let removal = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) => Err(e),
        };
        match removal {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Preset '{}' has no directory at {}", key, path.display());
            }
            Err(e) => {
                error!("Could not remove weather preset '{}': {}", key, e);
                return Ok(DeleteOutcome::RemovalFailed(e.to_string()));
            }
        }

        info!("Deleted weather preset '{}'", key);
        Ok(DeleteOutcome::Deleted)
    }

    fn io_error(&self, source: io::Error) -> RegistryError {
        RegistryError::Io {
            path: self.base_dir.clone(),
            source,
        }
    }
}
