//! Pure calculation functions for fill-crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.
//!
//! ## Rounding
//!
//! The covering dimension is truncated toward zero. It is computed with exact
//! integer cross-multiplication rather than floating point, so the truncation
//! is that of the true quotient. Since the true quotient is never below the
//! target on the non-matching axis, the truncated value always covers it.

use super::backend::Dimensions;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid dimension: {width}x{height} (both sides must be positive)")]
    ZeroDimension { width: u32, height: u32 },
    #[error("resize dimension overflows: {0} pixels")]
    Overflow(u64),
    #[error("resizing to {width}x{height} needs {bytes} bytes, over the {limit} byte limit")]
    TooLarge {
        width: u32,
        height: u32,
        bytes: u64,
        limit: u64,
    },
}

/// Centered crop rectangle inside the resized image.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Resize dimension plus the crop box taken from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillGeometry {
    pub resize: Dimensions,
    pub crop: CropBox,
}

impl FillGeometry {
    /// True when the source already has the resize dimension.
    pub fn is_identity_resize(&self, source: Dimensions) -> bool {
        self.resize == source
    }
}

fn ensure_positive(dims: Dimensions) -> Result<(), GeometryError> {
    if dims.width == 0 || dims.height == 0 {
        return Err(GeometryError::ZeroDimension {
            width: dims.width,
            height: dims.height,
        });
    }
    Ok(())
}

fn to_u32(value: u64) -> Result<u32, GeometryError> {
    u32::try_from(value).map_err(|_| GeometryError::Overflow(value))
}

/// Calculate dimensions needed to fill a target area (resize before crop).
///
/// Returns dimensions that completely cover the target area while maintaining
/// the source aspect ratio. One dimension matches the target exactly, the
/// other is truncated toward zero and meets or exceeds it.
///
/// # Examples
/// ```
/// # use fillcrop::imaging::{Dimensions, calculate_fill_dimensions};
/// let source = Dimensions { width: 4000, height: 2000 };
/// let target = Dimensions { width: 2200, height: 2200 };
/// let resize = calculate_fill_dimensions(source, target).unwrap();
/// assert_eq!((resize.width, resize.height), (4400, 2200));
/// ```
pub fn calculate_fill_dimensions(
    source: Dimensions,
    target: Dimensions,
) -> Result<Dimensions, GeometryError> {
    ensure_positive(source)?;
    ensure_positive(target)?;

    let (src_w, src_h) = (u64::from(source.width), u64::from(source.height));
    let (tgt_w, tgt_h) = (u64::from(target.width), u64::from(target.height));

    // src_w / src_h > tgt_w / tgt_h, without division
    if src_w * tgt_h > tgt_w * src_h {
        // Source is wider: height matches, width exceeds
        Ok(Dimensions {
            width: to_u32(tgt_h * src_w / src_h)?,
            height: target.height,
        })
    } else {
        // Source is taller or equal: width matches, height meets or exceeds
        Ok(Dimensions {
            width: target.width,
            height: to_u32(tgt_w * src_h / src_w)?,
        })
    }
}

/// Calculate the crop box centered in `resized` with the size of `target`.
///
/// Offsets use floor division, so odd excess leaves the extra pixel on the
/// right/bottom. `resized` must cover `target` on both axes.
pub fn calculate_crop_box(resized: Dimensions, target: Dimensions) -> CropBox {
    let left = resized.width.saturating_sub(target.width) / 2;
    let top = resized.height.saturating_sub(target.height) / 2;
    CropBox {
        left,
        top,
        right: left + target.width,
        bottom: top + target.height,
    }
}

/// Resize dimension and centered crop box for one source image.
pub fn calculate_fill_geometry(
    source: Dimensions,
    target: Dimensions,
) -> Result<FillGeometry, GeometryError> {
    let resize = calculate_fill_dimensions(source, target)?;
    Ok(FillGeometry {
        resize,
        crop: calculate_crop_box(resize, target),
    })
}

/// Bytes held at peak while resampling `source` to `resize`.
///
/// The resampler first scales vertically into an `Rgba<f32>` buffer of
/// `source.width x resize.height`, then horizontally into the output buffer.
pub fn resize_alloc_bytes(source: Dimensions, resize: Dimensions, bytes_per_pixel: u8) -> u64 {
    const INTERMEDIATE_BYTES_PER_PIXEL: u64 = 16;
    let intermediate = u64::from(source.width)
        .saturating_mul(u64::from(resize.height))
        .saturating_mul(INTERMEDIATE_BYTES_PER_PIXEL);
    let output = u64::from(resize.width)
        .saturating_mul(u64::from(resize.height))
        .saturating_mul(u64::from(bytes_per_pixel));
    intermediate.saturating_add(output)
}

/// Reject a resize whose buffers would exceed `limit` bytes.
///
/// Extreme aspect ratios (a 1x2000 strip filling 2200x2200 resizes to
/// 2200x4400000) produce a valid geometry that no allocator can serve.
pub fn check_resize_alloc(
    source: Dimensions,
    resize: Dimensions,
    bytes_per_pixel: u8,
    limit: u64,
) -> Result<(), GeometryError> {
    let bytes = resize_alloc_bytes(source, resize, bytes_per_pixel);
    if bytes > limit {
        return Err(GeometryError::TooLarge {
            width: resize.width,
            height: resize.height,
            bytes,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    // =========================================================================
    // calculate_fill_dimensions tests
    // =========================================================================

    #[test]
    fn fill_wide_source_to_square_target() {
        // 4000x2000 (2:1) → 2200x2200: height matches, width = 2200 * 2 = 4400
        assert_eq!(
            calculate_fill_dimensions(dims(4000, 2000), dims(2200, 2200)),
            Ok(dims(4400, 2200))
        );
    }

    #[test]
    fn fill_tall_source_to_square_target() {
        // 1000x2000 (1:2) → 2200x2200: width matches, height = 4400
        assert_eq!(
            calculate_fill_dimensions(dims(1000, 2000), dims(2200, 2200)),
            Ok(dims(2200, 4400))
        );
    }

    #[test]
    fn fill_same_size_is_identity() {
        assert_eq!(
            calculate_fill_dimensions(dims(2200, 2200), dims(2200, 2200)),
            Ok(dims(2200, 2200))
        );
    }

    #[test]
    fn fill_same_aspect_scales_down() {
        // 800x600 (4:3) → 400x300 (4:3): equal aspect takes the width branch
        assert_eq!(
            calculate_fill_dimensions(dims(800, 600), dims(400, 300)),
            Ok(dims(400, 300))
        );
    }

    #[test]
    fn fill_truncates_toward_zero() {
        // 800x600 → 400x500: width = 500 * 800 / 600 = 666.67 → 666
        assert_eq!(
            calculate_fill_dimensions(dims(800, 600), dims(400, 500)),
            Ok(dims(666, 500))
        );
    }

    #[test]
    fn fill_upscales_small_sources() {
        // 100x50 → 2200x2200: height matches, width = 4400
        assert_eq!(
            calculate_fill_dimensions(dims(100, 50), dims(2200, 2200)),
            Ok(dims(4400, 2200))
        );
    }

    #[test]
    fn fill_exact_thirds_do_not_under_cover() {
        // 1:3 source into a 1:3 target: float division can land on 299.999...
        assert_eq!(
            calculate_fill_dimensions(dims(1, 3), dims(100, 300)),
            Ok(dims(100, 300))
        );
        assert_eq!(
            calculate_fill_dimensions(dims(7, 21), dims(33, 99)),
            Ok(dims(33, 99))
        );
    }

    #[test]
    fn fill_always_covers_target() {
        let sources = [(1, 1), (3, 7), (4000, 2000), (1999, 2001), (17, 5), (1, 1000)];
        let targets = [(2200, 2200), (400, 500), (1920, 1080), (7, 3)];
        for &(sw, sh) in &sources {
            for &(tw, th) in &targets {
                let r = calculate_fill_dimensions(dims(sw, sh), dims(tw, th)).unwrap();
                assert!(r.width >= tw, "{sw}x{sh} → {tw}x{th}: width {}", r.width);
                assert!(r.height >= th, "{sw}x{sh} → {tw}x{th}: height {}", r.height);
                assert!(
                    r.width == tw || r.height == th,
                    "{sw}x{sh} → {tw}x{th}: neither axis matches ({}x{})",
                    r.width,
                    r.height
                );
            }
        }
    }

    #[test]
    fn fill_preserves_aspect_within_one_pixel() {
        let cases = [((4000, 3000), (2200, 2200)), ((1234, 567), (300, 400))];
        for ((sw, sh), (tw, th)) in cases {
            let r = calculate_fill_dimensions(dims(sw, sh), dims(tw, th)).unwrap();
            // Height implied by the resized width at source aspect
            let implied_h = r.width as f64 * sh as f64 / sw as f64;
            assert!((implied_h - r.height as f64).abs() <= 1.0);
        }
    }

    #[test]
    fn fill_rejects_zero_source() {
        assert_eq!(
            calculate_fill_dimensions(dims(0, 100), dims(10, 10)),
            Err(GeometryError::ZeroDimension {
                width: 0,
                height: 100
            })
        );
    }

    #[test]
    fn fill_rejects_zero_target() {
        assert!(matches!(
            calculate_fill_dimensions(dims(100, 100), dims(10, 0)),
            Err(GeometryError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn fill_reports_overflow() {
        // 65535:1 source into a tall target → width = 100000 * 65535
        assert!(matches!(
            calculate_fill_dimensions(dims(65535, 1), dims(1, 100_000)),
            Err(GeometryError::Overflow(_))
        ));
    }

    // =========================================================================
    // calculate_crop_box tests
    // =========================================================================

    #[test]
    fn crop_box_centers_horizontally() {
        let crop = calculate_crop_box(dims(4400, 2200), dims(2200, 2200));
        assert_eq!(
            crop,
            CropBox {
                left: 1100,
                top: 0,
                right: 3300,
                bottom: 2200
            }
        );
    }

    #[test]
    fn crop_box_centers_vertically() {
        let crop = calculate_crop_box(dims(2200, 4400), dims(2200, 2200));
        assert_eq!(
            crop,
            CropBox {
                left: 0,
                top: 1100,
                right: 2200,
                bottom: 3300
            }
        );
    }

    #[test]
    fn crop_box_floors_odd_excess() {
        // 3 pixels of excess → left offset 1
        let crop = calculate_crop_box(dims(403, 500), dims(400, 500));
        assert_eq!(crop.left, 1);
        assert_eq!(crop.width(), 400);
        assert_eq!(crop.height(), 500);
    }

    // =========================================================================
    // calculate_fill_geometry tests
    // =========================================================================

    #[test]
    fn geometry_identity_for_exact_match() {
        let source = dims(2200, 2200);
        let geometry = calculate_fill_geometry(source, dims(2200, 2200)).unwrap();
        assert!(geometry.is_identity_resize(source));
        assert_eq!(
            geometry.crop,
            CropBox {
                left: 0,
                top: 0,
                right: 2200,
                bottom: 2200
            }
        );
    }

    #[test]
    fn geometry_crop_matches_target_size() {
        for (sw, sh) in [(640, 480), (480, 640), (1001, 999), (5, 5000)] {
            let g = calculate_fill_geometry(dims(sw, sh), dims(300, 200)).unwrap();
            assert_eq!(g.crop.width(), 300);
            assert_eq!(g.crop.height(), 200);
            assert!(g.crop.right <= g.resize.width);
            assert!(g.crop.bottom <= g.resize.height);
            assert_eq!(g.crop.left, (g.resize.width - 300) / 2);
            assert_eq!(g.crop.top, (g.resize.height - 200) / 2);
        }
    }

    // =========================================================================
    // resize allocation tests
    // =========================================================================

    #[test]
    fn resize_alloc_counts_intermediate_and_output() {
        // 400x200 → 440x220 RGB8: 400*220*16 + 440*220*3
        assert_eq!(
            resize_alloc_bytes(dims(400, 200), dims(440, 220), 3),
            1_408_000 + 290_400
        );
    }

    #[test]
    fn resize_alloc_saturates_instead_of_wrapping() {
        let huge = dims(u32::MAX, u32::MAX);
        assert_eq!(resize_alloc_bytes(huge, huge, 16), u64::MAX);
    }

    #[test]
    fn thin_strip_exceeds_alloc_limit() {
        let source = dims(1, 2000);
        let resize = calculate_fill_dimensions(source, dims(2200, 2200)).unwrap();
        assert_eq!(resize, dims(2200, 4_400_000));

        let err = check_resize_alloc(source, resize, 3, 512 * 1024 * 1024).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::TooLarge {
                width: 2200,
                height: 4_400_000,
                ..
            }
        ));
    }

    #[test]
    fn ordinary_photo_fits_alloc_limit() {
        let source = dims(6000, 4000);
        let resize = calculate_fill_dimensions(source, dims(2200, 2200)).unwrap();
        assert_eq!(check_resize_alloc(source, resize, 4, 512 * 1024 * 1024), Ok(()));
    }
}
