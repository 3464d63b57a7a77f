//! Input folder scanning.
//!
//! Lists the input folder one level deep and classifies every entry by file
//! name. Nothing is opened here; a file that merely looks like an image is a
//! candidate and only fails later, at decode time.
//!
//! ## Allow-list
//!
//! Candidates are matched by a case-insensitive suffix against:
//!
//! ```text
//! .png  .jpg  .jpeg  .bmp  .gif
//! ```
//!
//! Subdirectories are listed like files and are not descended into. A
//! directory named `holiday.jpg` is therefore a candidate.
//!
//! ## Order
//!
//! Entries come back in whatever order the filesystem lists them. No sorting
//! is applied.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name suffixes (without the dot) accepted as images.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read input folder {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("input folder is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Name ends in an allow-listed suffix.
    Candidate,
    /// Skipped by the filter; never opened.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Lossy UTF-8 rendering of the file name, for display.
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ScanEntry {
    pub fn is_candidate(&self) -> bool {
        self.kind == EntryKind::Candidate
    }
}

/// Check a file name against [`SUPPORTED_EXTENSIONS`], ignoring case.
pub fn is_supported_image(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| {
        lower
            .strip_suffix(ext)
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

fn classify(name: &str) -> EntryKind {
    if is_supported_image(name) {
        EntryKind::Candidate
    } else {
        EntryKind::Unsupported
    }
}

/// List `root` non-recursively and classify each entry.
///
/// Only failing to open `root` itself is an error. An entry the listing
/// cannot read is logged and left out, so the rest of the folder still runs.
pub fn scan_folder(root: &Path) -> Result<Vec<ScanEntry>, ScanError> {
    let io_error = |source: std::io::Error| ScanError::Io {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(io_error)?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let listing = fs::read_dir(root)
        .map_err(io_error)?
        .map(|entry| entry.map(|e| (e.file_name().to_string_lossy().into_owned(), e.path())));
    Ok(classify_listing(root, listing))
}

/// Classify `(name, path)` listing results, dropping unreadable ones.
fn classify_listing(
    root: &Path,
    listing: impl Iterator<Item = std::io::Result<(String, PathBuf)>>,
) -> Vec<ScanEntry> {
    listing
        .filter_map(|entry| match entry {
            Ok((name, path)) => Some(ScanEntry {
                kind: classify(&name),
                path,
                name,
            }),
            Err(err) => {
                tracing::warn!(folder = %root.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .collect()
}
