//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`operations`](super::operations) module and the
//! [`backend`](super::backend), which does the pixel work.

use super::backend::Dimensions;
use image::imageops::FilterType;
use std::path::PathBuf;

/// Resampling filter for the cover-resize.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Upper bound on the bytes a single resize may allocate.
///
/// Matches the `image` crate's default decoder allocation limit.
pub const MAX_RESIZE_ALLOC: u64 = 512 * 1024 * 1024;

/// Parameters for a fill-crop operation (cover-resize + center crop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillCropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Final output dimensions.
    pub target: Dimensions,
}
