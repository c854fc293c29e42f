//! Config loading helpers.

use std::path::{Path, PathBuf};

/// Search upward from the current directory for the config file.
///
/// Returns the first existing match, walking from cwd to the filesystem
/// root. Absolute paths are returned as-is when they exist.
pub fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}
