//! Build file-copy helper.
//!
//! Takes a flat, even-length list of paths, pairs the first half (sources)
//! with the second half (destinations) positionally, and copies each pair.
//! Directories are replaced wholesale (delete then recopy, no merge) and
//! stale build artifacts are skipped by file name. The first error aborts
//! the whole batch.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// File name excluded from directory copies. Incremental-build state that
/// must never leak into a copy destination.
pub const IGNORED_FILE_NAME: &str = "tsconfig.tsbuildinfo";

/// Result type for copy operations.
pub type CopyResult<T> = Result<T, CopyError>;

/// Errors that can occur while copying files.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The path list cannot be split into source/destination pairs.
    #[error("expected an even number of paths, got {0}")]
    OddArgumentCount(usize),

    /// A source path does not exist.
    #[error("source path not found: {0}")]
    SourceMissing(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Split a flat path list at the midpoint into `(source, destination)`
/// pairs: element `i` pairs with element `i + half`.
pub fn split_pairs(paths: &[PathBuf]) -> CopyResult<Vec<(PathBuf, PathBuf)>> {
    if paths.len() % 2 != 0 {
        return Err(CopyError::OddArgumentCount(paths.len()));
    }

    let half = paths.len() / 2;
    let (sources, destinations) = paths.split_at(half);

    Ok(sources.iter().cloned().zip(destinations.iter().cloned()).collect())
}

/// Copy every pair in order. Stops at the first failure.
pub fn copy_batch(pairs: &[(PathBuf, PathBuf)]) -> CopyResult<()> {
    for (src, dst) in pairs {
        copy_entry(src, dst)?;
    }
    Ok(())
}

/// Copy a single source to a single destination, creating the
/// destination's parent directory if absent.
pub fn copy_entry(src: &Path, dst: &Path) -> CopyResult<()> {
    if !src.exists() {
        return Err(CopyError::SourceMissing(src.to_path_buf()));
    }

    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    if src.is_dir() {
        // No merge semantics: any pre-existing destination tree goes away
        // before the recopy.
        if dst.is_dir() {
            fs::remove_dir_all(dst)?;
        } else if dst.exists() {
            fs::remove_file(dst)?;
        }
        copy_tree(src, dst)?;
    } else {
        debug!(src = %src.display(), dst = %dst.display(), "copying file");
        fs::copy(src, dst)?;
    }

    Ok(())
}

/// Recursively copy `src` into `dst`, skipping entries named
/// [`IGNORED_FILE_NAME`].
fn copy_tree(src: &Path, dst: &Path) -> CopyResult<()> {
    debug!(src = %src.display(), dst = %dst.display(), "copying tree");
    fs::create_dir_all(dst)?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != IGNORED_FILE_NAME);

    for entry in walker {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
