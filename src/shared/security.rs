use crate::shared::error::MotError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for model and catalog files (10 MB).
/// The bundled SPDX license list is well under 1 MB.
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a model or catalog file after checking that it is a regular,
/// non-symlinked file within the size limit.
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - Human-readable description used in error messages
///   (e.g. "model file", "license catalog")
///
/// # Errors
/// - `MotError::SecurityError` if the path is a symbolic link or too large
/// - `MotError::FileReadError` if the path is missing, not a file, or unreadable
pub fn read_input_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| MotError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(MotError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", description),
            hint: "Pass the path of the target file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(MotError::FileReadError {
            path: path.to_path_buf(),
            details: format!("The {} is not a regular file", description),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        MotError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(MotError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the input into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}
