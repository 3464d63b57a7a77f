//! Image processing — pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Geometry** | [`calculate_fill_geometry`] (integer math, no I/O) |
//! | **Fill-crop** | Lanczos3 `resize_exact` + `crop_imm` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for resize and crop geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, FillOutcome, ImageBackend};
pub use calculations::{
    CropBox, FillGeometry, GeometryError, calculate_crop_box, calculate_fill_dimensions,
    calculate_fill_geometry, check_resize_alloc, resize_alloc_bytes,
};
pub use operations::{create_fill_crop, get_dimensions, plan_fill_crop};
pub use params::{FillCropParams, MAX_RESIZE_ALLOC, RESIZE_FILTER};
pub use rust_backend::RustBackend;
