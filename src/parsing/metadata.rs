use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use thiserror::Error;
use tracing::debug;

/// Name of the per-preset metadata file
pub const METADATA_FILE: &str = "weather.ini";

/// Section holding launcher-facing values
pub const LAUNCHER_SECTION: &str = "LAUNCHER";

/// Key holding the display name
pub const NAME_KEY: &str = "NAME";

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Failed to read preset metadata {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preset metadata {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: ini::ParseError,
    },
}

/// Path of the metadata file for `preset_key` under `base_dir`
#[must_use]
pub fn metadata_path(base_dir: &Path, preset_key: &str) -> PathBuf {
    base_dir.join(preset_key).join(METADATA_FILE)
}

/// Resolve the display name of a preset from its `weather.ini`.
///
/// Returns `Ok(None)` when the name is unresolved: the file cannot be opened,
/// the `LAUNCHER` section or its `NAME` key is missing, or the value is empty.
///
/// # Errors
///
/// Returns `MetadataError::Unreadable` if the file was opened but reading it
/// failed, or `MetadataError::Malformed` if the text is not valid INI. Bytes
/// that are not UTF-8 are decoded lossily rather than rejected.
pub fn resolve_display_name(
    base_dir: &Path,
    preset_key: &str,
) -> Result<Option<String>, MetadataError> {
    let path = metadata_path(base_dir, preset_key);

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(e) => {
            debug!("No metadata for preset '{}' ({})", preset_key, e);
            return Ok(None);
        }
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| MetadataError::Unreadable {
            path: path.clone(),
            source,
        })?;

    let content = String::from_utf8_lossy(&bytes);
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    parse_display_name(content).map_err(|source| MetadataError::Malformed { path, source })
}

/// Extract `[LAUNCHER] NAME` from metadata text.
///
/// Values are taken literally (no backslash escapes) and inline `;`/`#`
/// comments are dropped. Repeated `LAUNCHER` sections or `NAME` keys resolve
/// to the last value.
///
/// # Errors
///
/// Returns the INI parser's error if the text is structurally invalid.
pub fn parse_display_name(text: &str) -> Result<Option<String>, ini::ParseError> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(text, options)?;

    let name = ini
        .section_all(Some(LAUNCHER_SECTION))
        .flat_map(|section| section.get_all(NAME_KEY))
        .last()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string);

    Ok(name)
}
