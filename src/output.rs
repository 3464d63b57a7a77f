//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Run
//!
//! One line per input folder entry, in processing order, then a summary:
//!
//! ```text
//! Skipping non-image file: notes.txt
//! Processed and saved: output/wide.png
//! Failed to process broken.png: cannot decode input/broken.png: ...
//! Done: 1 processed, 1 skipped, 1 failed
//! ```
//!
//! ## Check
//!
//! ```text
//! wide.png  4000x2000 → resize 4400x2200 → crop 1100,0 to 3300,2200
//! notes.txt  skipped
//! broken.png  unreadable: cannot decode input/broken.png: ...
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::imaging::{Dimensions, FillGeometry};
use crate::process::{BatchSummary, PlanEntry, ProcessEvent};

// ============================================================================
// Run output
// ============================================================================

/// Format the line for a single processing event.
pub fn format_process_event(event: &ProcessEvent) -> String {
    match event {
        ProcessEvent::Skipped { name } => format!("Skipping non-image file: {name}"),
        ProcessEvent::Processed(report) => {
            format!("Processed and saved: {}", report.output_path.display())
        }
        ProcessEvent::Failed { name, error } => format!("Failed to process {name}: {error}"),
    }
}

pub fn print_process_event(event: &ProcessEvent) {
    println!("{}", format_process_event(event));
}

pub fn format_summary(summary: &BatchSummary) -> String {
    format!("Done: {summary}")
}

pub fn print_summary(summary: &BatchSummary) {
    println!("{}", format_summary(summary));
}

// ============================================================================
// Check output
// ============================================================================

fn geometry_line(source: Dimensions, geometry: &FillGeometry) -> String {
    let crop = &geometry.crop;
    let resize = if geometry.is_identity_resize(source) {
        "no resize".to_string()
    } else {
        format!("resize {}", geometry.resize)
    };
    format!(
        "{source} → {resize} → crop {},{} to {},{}",
        crop.left, crop.top, crop.right, crop.bottom
    )
}

/// Format the dry-run plan, one line per input folder entry.
pub fn format_plan(entries: &[PlanEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            PlanEntry::Skipped { name } => format!("{name}  skipped"),
            PlanEntry::Planned {
                name,
                source,
                geometry,
            } => format!("{name}  {}", geometry_line(*source, geometry)),
            PlanEntry::Unreadable { name, error } => format!("{name}  unreadable: {error}"),
        })
        .collect()
}

pub fn print_plan(entries: &[PlanEntry]) {
    for line in format_plan(entries) {
        println!("{}", line);
    }
}
