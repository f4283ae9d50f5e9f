//! Metadata scanning of G-code headers
//!
//! Slicers front-load their summary comments, so only a bounded prefix of the
//! file is read. Scanning is best-effort and never fails: unrecognized or
//! malformed lines are skipped and simply leave their fields empty.
//!
//! Per-filament directives are gathered column by column (all lengths, all
//! weights, ...) and zipped into [`FilamentRecord`](crate::FilamentRecord)s
//! once the scan is done.

mod columns;
mod directive;
mod number;

use crate::model::{GcodeMetadata, ScanConfig};
use crate::time::normalize_time;
use columns::{FilamentColumns, format_grams};
use directive::{Directive, recognize};
use tracing::debug;

/// Extract print metadata from G-code text using the default configuration
///
/// # Example
///
/// ```
/// use gcode_meta::parse_metadata;
///
/// let gcode = "\
/// ; total estimated time: 1h 1m 1s
/// ; total filament length [mm] : 1000.0,2000.0
/// ; filament_type = PLA
/// G28
/// ";
/// let metadata = parse_metadata(gcode);
/// assert_eq!(metadata.print_time.as_deref(), Some("1h 2m"));
/// assert_eq!(metadata.filaments.len(), 2);
/// assert_eq!(metadata.filaments[1].material_type, "Unknown");
/// ```
pub fn parse_metadata(text: &str) -> GcodeMetadata {
    parse_metadata_with_config(text, &ScanConfig::default())
}

/// Extract print metadata from G-code text
///
/// Only the first [`ScanConfig::max_lines`] lines are examined. When a
/// directive appears more than once within that window the last occurrence
/// wins.
pub fn parse_metadata_with_config(text: &str, config: &ScanConfig) -> GcodeMetadata {
    let mut columns = FilamentColumns::default();
    let mut print_seconds = None;

    for (index, line) in text.lines().take(config.max_lines()).enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(directive) = recognize(line) else {
            continue;
        };
        debug!(line = index + 1, kind = directive.kind(), "recognized header directive");

        match directive {
            Directive::PrintTime { seconds, .. } => print_seconds = Some(seconds),
            Directive::FilamentLengths(values) => columns.lengths = values,
            Directive::FilamentWeights(values) => columns.weights = values,
            Directive::FilamentTypes(values) => columns.types = values,
            Directive::FilamentDensities(values) => columns.densities = values,
            Directive::FilamentColors(values) => columns.colors = values,
        }
    }

    let assembly = columns.assemble(config);
    debug!(
        filaments = assembly.filaments.len(),
        print_seconds = ?print_seconds,
        total_grams = ?assembly.total_grams,
        "scanned G-code header"
    );

    GcodeMetadata {
        print_time: print_seconds.map(normalize_time),
        print_time_seconds: print_seconds,
        filaments: assembly.filaments,
        total_filament_weight: assembly.total_grams.map(format_grams),
    }
}
