//! Source file enumeration.
//!
//! Lists the transcodable files directly inside the input directory. The
//! scan is non-recursive; subdirectories are not descended into.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Container extensions recognized as transcode sources.
pub const SOURCE_EXTENSIONS: &[&str] = &["mxf", "mp4", "mov", "mkv"];

/// Check if a path has a recognized source container extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use batch265::scanner::is_source_file;
///
/// assert!(is_source_file(Path::new("clip.mov")));
/// assert!(is_source_file(Path::new("/path/to/clip.MP4")));
/// assert!(!is_source_file(Path::new("notes.txt")));
/// ```
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Enumerate source files directly inside the given directory, sorted by
/// path for a stable processing order.
///
/// Returns an empty list when nothing matches. An unreadable or missing
/// directory is an error.
pub fn find_source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Input directory does not exist: {:?}", dir);
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to read directory: {:?}", dir))?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        if !is_source_file(path) {
            debug!("Skipping non-source file: {:?}", path);
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();

    debug!("Found {} source files in {:?}", files.len(), dir);
    Ok(files)
}
