//! Batch driver: fill-crop every image in a folder.
//!
//! ## Flow
//!
//! ```text
//! validate config → create output folder → scan input folder
//!   → for each entry, in listing order:
//!       not an image   → Skipped
//!       fill-crop ok   → Processed
//!       fill-crop err  → Failed, continue with the next entry
//! ```
//!
//! A failure on one file is reported through a [`ProcessEvent::Failed`] and
//! never stops the batch. Only problems that affect every file (an invalid
//! target size, an unreadable input folder, an output folder that cannot be
//! created) end the run with a [`ProcessError`].
//!
//! Processing is sequential; at most one decoded image is alive at a time.
//! Events are handed to the caller's callback on the same thread as soon as
//! each file is done.

use crate::config::{BatchConfig, ConfigError};
use crate::imaging::{
    BackendError, Dimensions, FillGeometry, ImageBackend, RustBackend, create_fill_crop,
    plan_fill_crop,
};
use crate::scan::{ScanEntry, ScanError, scan_folder};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("cannot create output folder {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a successful fill-crop of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub name: String,
    pub output_path: PathBuf,
    pub source: Dimensions,
    pub geometry: FillGeometry,
}

/// Progress events, one per input folder entry.
#[derive(Debug)]
pub enum ProcessEvent {
    /// Entry name is not in the allow-list.
    Skipped { name: String },
    Processed(FileReport),
    /// Decode, geometry, or encode failed for this file.
    Failed { name: String, error: BackendError },
}

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, event: &ProcessEvent) {
        match event {
            ProcessEvent::Skipped { .. } => self.skipped += 1,
            ProcessEvent::Processed(_) => self.processed += 1,
            ProcessEvent::Failed { .. } => self.failed += 1,
        }
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processed, {} skipped, {} failed",
            self.processed, self.skipped, self.failed
        )
    }
}

/// Dry-run result for one input folder entry.
#[derive(Debug)]
pub enum PlanEntry {
    Skipped {
        name: String,
    },
    Planned {
        name: String,
        source: Dimensions,
        geometry: FillGeometry,
    },
    Unreadable {
        name: String,
        error: BackendError,
    },
}

/// Fill-crop every image in `config.input_folder` with the `image` crate backend.
pub fn process(
    config: &BatchConfig,
    on_event: impl FnMut(ProcessEvent),
) -> Result<BatchSummary, ProcessError> {
    process_with_backend(&RustBackend::new(), config, on_event)
}

/// Process a batch using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    config: &BatchConfig,
    mut on_event: impl FnMut(ProcessEvent),
) -> Result<BatchSummary, ProcessError> {
    config.validate()?;

    std::fs::create_dir_all(&config.output_folder).map_err(|source| {
        ProcessError::CreateOutput {
            path: config.output_folder.clone(),
            source,
        }
    })?;
    let entries = scan_folder(&config.input_folder)?;
    tracing::info!(
        input = %config.input_folder.display(),
        output = %config.output_folder.display(),
        target = %config.target(),
        entries = entries.len(),
        "starting batch"
    );

    let mut summary = BatchSummary::default();
    for entry in entries {
        let event = if entry.is_candidate() {
            match process_file(backend, &entry, &config.output_folder, config.target()) {
                Ok(report) => ProcessEvent::Processed(report),
                Err(error) => ProcessEvent::Failed {
                    name: entry.name,
                    error,
                },
            }
        } else {
            ProcessEvent::Skipped { name: entry.name }
        };
        summary.record(&event);
        on_event(event);
    }

    tracing::info!(%summary, "batch finished");
    Ok(summary)
}

/// Fill-crop a single scanned entry into `output_dir`.
pub fn process_file(
    backend: &impl ImageBackend,
    entry: &ScanEntry,
    output_dir: &Path,
    target: Dimensions,
) -> Result<FileReport, BackendError> {
    let (params, outcome) = create_fill_crop(backend, &entry.path, output_dir, target)?;
    Ok(FileReport {
        name: entry.name.clone(),
        output_path: params.output,
        source: outcome.source,
        geometry: outcome.geometry,
    })
}

/// Compute the geometry for every image without writing anything.
pub fn plan(config: &BatchConfig) -> Result<Vec<PlanEntry>, ProcessError> {
    plan_with_backend(&RustBackend::new(), config)
}

/// Dry run using a specific backend.
pub fn plan_with_backend(
    backend: &impl ImageBackend,
    config: &BatchConfig,
) -> Result<Vec<PlanEntry>, ProcessError> {
    config.validate()?;
    let target = config.target();

    Ok(scan_folder(&config.input_folder)?
        .into_iter()
        .map(|entry| {
            if !entry.is_candidate() {
                return PlanEntry::Skipped { name: entry.name };
            }
            match plan_fill_crop(backend, &entry.path, target) {
                Ok((source, geometry)) => PlanEntry::Planned {
                    name: entry.name,
                    source,
                    geometry,
                },
                Err(error) => PlanEntry::Unreadable {
                    name: entry.name,
                    error,
                },
            }
        })
        .collect())
}
