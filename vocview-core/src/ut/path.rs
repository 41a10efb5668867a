// Copyright (c) 2025, The vocview developers
// Licensed under the MIT License

use std::path::{Path, PathBuf};

use crate::error::VocError;

/// Ensures a new directory is created with an incrementing suffix if necessary.
///
/// # Arguments
///
/// * `directory` - Path to new directory - no overwrites allowed
pub fn create_directory<P: AsRef<Path>>(directory: P) -> Result<PathBuf, VocError> {
    let directory = directory.as_ref();

    if !directory.exists() {
        std::fs::create_dir(directory).map_err(|err| VocError::DirError(err.to_string()))?;
        return Ok(directory.to_path_buf());
    }

    let parent = directory.parent().unwrap_or_else(|| Path::new("."));
    let base_name = directory
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| VocError::DirError("Invalid directory name".to_string()))?;

    for index in 0..30 {
        let new_dir = parent.join(format!("{}_{}", base_name, index));

        if !new_dir.exists() {
            std::fs::create_dir(&new_dir).map_err(|err| VocError::DirError(err.to_string()))?;
            return Ok(new_dir);
        }
    }

    Err(VocError::DirError(format!(
        "Could not create a directory in alotted increments. Check the directory path: {}",
        directory.display()
    )))
}

/// Collect file paths from a directory filtered by extension
///
/// # Arguments
///
/// * `directory` - Path to directory containing files
/// * `valid_ext` - Lowercase extensions to keep
///
/// # Examples
///
/// ```no_run
/// use vocview_core::constant::SUPPORTED_IMAGE_FORMATS;
/// use vocview_core::ut::path::collect_file_paths;
///
/// let files = collect_file_paths("directory/", SUPPORTED_IMAGE_FORMATS.as_slice());
/// ```
pub fn collect_file_paths<P>(directory: P, valid_ext: &[&str]) -> Result<Vec<PathBuf>, VocError>
where
    P: AsRef<Path> + ToString,
{
    let message = directory.to_string();

    let files: Vec<PathBuf> = std::fs::read_dir(directory)
        .map_err(|_| VocError::DirError(message))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.to_lowercase())
                    .is_some_and(|ext| valid_ext.contains(&ext.as_str()))
        })
        .collect();

    Ok(files)
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_collect_file_paths_filters_extensions() {
        let root = std::env::temp_dir().join("TEST_COLLECT_PATHS");
        std::fs::create_dir_all(&root).unwrap();

        std::fs::write(root.join("a.png"), b"x").unwrap();
        std::fs::write(root.join("b.XML"), b"x").unwrap();
        std::fs::write(root.join("c.txt"), b"x").unwrap();

        let images =
            collect_file_paths(root.to_string_lossy().to_string(), &["png", "jpg"]).unwrap();
        assert_eq!(images.len(), 1);

        // Extension matching is case-insensitive
        let annotations = collect_file_paths(root.to_string_lossy().to_string(), &["xml"]).unwrap();
        assert_eq!(annotations.len(), 1);

        std::fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_collect_file_paths_missing_directory() {
        let files = collect_file_paths("does_not_exist/", &["png"]);
        assert!(matches!(files, Err(VocError::DirError(_))));
    }

    #[test]
    fn test_create_directory_increments_suffix() {
        let base = std::env::temp_dir().join("TEST_CREATE_DIRECTORY");

        let first = create_directory(&base).unwrap();
        assert_eq!(first, base);

        let second = create_directory(&base).unwrap();
        assert!(second.to_string_lossy().ends_with("TEST_CREATE_DIRECTORY_0"));

        std::fs::remove_dir(first).unwrap();
        std::fs::remove_dir(second).unwrap();
    }
}
