//! Shared test utilities for the fillcrop test suite.
//!
//! Synthetic image fixtures are generated on the fly so tests never depend on
//! binary files checked into the repository.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! write_test_image(&tmp.path().join("input/wide.png"), 400, 200);
//! touch(&tmp.path().join("input/notes.txt"));
//! ```

use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Write a gradient image, encoded according to the path's extension.
///
/// Parent directories are created as needed.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    ensure_parent(path);
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let format = ImageFormat::from_path(path)
        .unwrap_or_else(|e| panic!("no format for {}: {e}", path.display()));
    let result = match format {
        ImageFormat::Gif => image::DynamicImage::ImageRgb8(img)
            .to_rgba8()
            .save_with_format(path, format),
        _ => img.save_with_format(path, format),
    };
    result.unwrap_or_else(|e| panic!("cannot write {}: {e}", path.display()));
}

/// Create an empty file, creating parent directories as needed.
pub fn touch(path: &Path) {
    ensure_parent(path);
    std::fs::write(path, b"").unwrap();
}

fn ensure_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
}
