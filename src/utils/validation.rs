//! Input checks for caller-supplied preset keys.

/// Longest directory name accepted as a preset key
pub const MAX_KEY_LENGTH: usize = 255;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty preset key provided")]
    EmptyKey,
    #[error("Preset key too long: exceeds {MAX_KEY_LENGTH} characters")]
    KeyTooLong,
    #[error("Invalid preset key: contains path separators or control characters")]
    InvalidKey,
}

/// Check that `key` names a single directory directly under the preset base.
///
/// Deletion does not need this, since it only acts on keys already present in
/// the catalog. Reads of a single preset's metadata do.
///
/// # Errors
///
/// Returns `ValidationError::EmptyKey` for an empty key, `KeyTooLong` past the
/// length limit, or `InvalidKey` for traversal, separators, or control characters.
pub fn validate_preset_key(key: &str) -> Result<&str, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey);
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(ValidationError::KeyTooLong);
    }

    if key == "." || key == ".." || key.contains('/') || key.contains('\\') {
        return Err(ValidationError::InvalidKey);
    }

    if key.chars().any(char::is_control) {
        return Err(ValidationError::InvalidKey);
    }

    Ok(key)
}
