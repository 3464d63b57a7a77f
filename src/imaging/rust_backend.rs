//! Pure Rust image processing backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, BMP, GIF) | `image::ImageReader` with content sniffing |
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3`, bounded by [`MAX_RESIZE_ALLOC`] |
//! | Crop | `DynamicImage::crop_imm` |
//! | Encode | `DynamicImage::save_with_format`, format from the output extension |

use super::backend::{BackendError, Dimensions, FillOutcome, ImageBackend};
use super::calculations::{calculate_fill_geometry, check_resize_alloc};
use super::params::{FillCropParams, MAX_RESIZE_ALLOC, RESIZE_FILTER};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn encode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Encode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Open an image, trusting its content over its extension.
fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(path, e))
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?.decode().map_err(|e| decode_error(path, e))
}

/// Convert to a pixel layout the target encoder accepts.
fn encodable(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    match (format, img.color()) {
        (ImageFormat::Jpeg, ColorType::L8 | ColorType::Rgb8) => img,
        (ImageFormat::Jpeg, _) => DynamicImage::ImageRgb8(img.to_rgb8()),
        (ImageFormat::Gif, ColorType::Rgb8 | ColorType::Rgba8) => img,
        (ImageFormat::Gif, _) => DynamicImage::ImageRgba8(img.to_rgba8()),
        (ImageFormat::Bmp, ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8) => {
            img
        }
        (ImageFormat::Bmp, color) if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
        (ImageFormat::Bmp, _) => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    }
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: DynamicImage, path: &Path) -> Result<(), BackendError> {
    let format = ImageFormat::from_path(path).map_err(|e| encode_error(path, e))?;
    encodable(img, format)
        .save_with_format(path, format)
        .map_err(|e| encode_error(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        Ok(Dimensions { width, height })
    }

    fn fill_crop(&self, params: &FillCropParams) -> Result<FillOutcome, BackendError> {
        let img = load_image(&params.source)?;
        let source = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        let geometry = calculate_fill_geometry(source, params.target)?;
        tracing::debug!(
            path = %params.source.display(),
            source = %source,
            resize = %geometry.resize,
            left = geometry.crop.left,
            top = geometry.crop.top,
            "fill-crop geometry"
        );

        let resized = if geometry.is_identity_resize(source) {
            img
        } else {
            check_resize_alloc(
                source,
                geometry.resize,
                img.color().bytes_per_pixel(),
                MAX_RESIZE_ALLOC,
            )?;
            img.resize_exact(geometry.resize.width, geometry.resize.height, RESIZE_FILTER)
        };
        let cropped = resized.crop_imm(
            geometry.crop.left,
            geometry.crop.top,
            geometry.crop.width(),
            geometry.crop.height(),
        );
        drop(resized);

        save_image(cropped, &params.output)?;
        Ok(FillOutcome { source, geometry })
    }
}
