//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take the target box, compute parameters, and call the backend.

use super::backend::{BackendError, Dimensions, FillOutcome, ImageBackend};
use super::calculations::{FillGeometry, calculate_fill_geometry};
use super::params::FillCropParams;
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Plan a fill-crop without touching pixels.
///
/// Reads only the header dimensions of `source`.
pub fn plan_fill_crop(
    backend: &impl ImageBackend,
    source: &Path,
    target: Dimensions,
) -> Result<(Dimensions, FillGeometry)> {
    let dims = get_dimensions(backend, source)?;
    let geometry = calculate_fill_geometry(dims, target)?;
    Ok((dims, geometry))
}

/// Fill-crop `source` into `output_dir`, keeping the file name.
///
/// The output file is overwritten if it exists.
pub fn create_fill_crop(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    target: Dimensions,
) -> Result<(FillCropParams, FillOutcome)> {
    let file_name = source.file_name().ok_or_else(|| BackendError::Decode {
        path: source.to_path_buf(),
        message: "path has no file name".to_string(),
    })?;

    let params = FillCropParams {
        source: source.to_path_buf(),
        output: output_dir.join(file_name),
        target,
    };
    let outcome = backend.fill_crop(&params)?;
    Ok((params, outcome))
}
