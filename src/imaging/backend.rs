//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify and fill_crop.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so the batch driver can be exercised
//! without touching pixels.

use super::calculations::{FillGeometry, GeometryError};
use super::params::FillCropParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
    #[error("cannot encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Pixel dimensions of an image or a target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a completed fill-crop did to one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOutcome {
    /// Dimensions of the decoded source.
    pub source: Dimensions,
    pub geometry: FillGeometry,
}

/// Trait for image processing backends.
///
/// Keeps the batch driver backend-agnostic: it only ever asks for header
/// dimensions or a complete decode → resize → crop → encode round.
pub trait ImageBackend {
    /// Get image dimensions without decoding pixel data.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resize to cover the target box, center-crop, and write the result.
    fn fill_crop(&self, params: &FillCropParams) -> Result<FillOutcome, BackendError>;
}
