//! # fillcrop
//!
//! Batch resize and center-crop a folder of images to one fixed resolution.
//!
//! Every image directly inside the input folder is scaled, keeping its aspect
//! ratio, until it covers the target box on both axes. The excess is then
//! cropped away around the center, so every output is exactly
//! `target_width × target_height`. Results are written to the output folder
//! under the same file name.
//!
//! ```text
//! 4000x2000 ──resize──▶ 4400x2200 ──crop(1100, 0, 3300, 2200)──▶ 2200x2200
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Geometry math, the [`ImageBackend`](imaging::ImageBackend) trait, and the `image` crate backend |
//! | [`scan`] | Lists the input folder and filters it by extension |
//! | [`process`] | Batch driver: one file at a time, failures contained per file |
//! | [`config`] | The four batch parameters: TOML file, CLI overrides, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Exact Integer Geometry
//!
//! The resize dimension is truncated toward zero, computed by integer
//! cross-multiplication instead of floating point division. Float division can
//! land a hair below an exact integer (e.g. `299.99999999999994`), which
//! would truncate to one pixel short of the target and break the crop. Integer
//! math gives the exact truncation, so the resized image always covers the
//! target box.
//!
//! ## Skip and Log
//!
//! A bad file (corrupt, unreadable, not encodable) produces a failure line and
//! the batch moves on. Only a problem that would affect every file stops the
//! run: a zero target dimension, a missing input folder, or an output folder
//! that cannot be created.

pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
