//! G-code embedded in zip-based print archives
//!
//! Sliced project files (`.gcode.3mf`) are ZIP containers that carry one
//! G-code stream per plate under `Metadata/`. Older exports may instead place
//! a single `.gcode` file at the archive root.

mod candidate;
mod reader;

pub use candidate::{StreamCandidate, StreamPriority};
pub use reader::{GcodeArchive, extract_from_archive, extract_from_reader};

/// Location of the default plate's G-code
pub const DEFAULT_PLATE_PATH: &str = "Metadata/plate_1.gcode";

/// Folder holding per-plate streams
pub const PLATE_DIR: &str = "Metadata/";

/// File name prefix of per-plate streams
pub const PLATE_PREFIX: &str = "plate_";

/// Extension of G-code streams
pub const GCODE_EXTENSION: &str = ".gcode";
