//! # gcode-meta
//!
//! Print time and filament usage extraction for slicer-generated G-code.
//!
//! G-code files written by slicers start with comment headers that summarize
//! the print: estimated time, filament length and weight per extruder,
//! material types and colors. This library reads those headers from plain
//! `.gcode` text or from zip-based `.gcode.3mf` archives and returns them as a
//! [`GcodeMetadata`] record.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - BambuStudio-style and Cura-style header dialects
//! - Multi-filament (AMS / multi-extruder) usage with per-filament colors
//! - Mass estimation when the slicer only reports length
//! - Plate-aware G-code lookup inside `.gcode.3mf` archives
//!
//! ## Example
//!
//! ```no_run
//! use gcode_meta::{SourceKind, extract_metadata};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("benchy.gcode.3mf")?;
//! let kind = SourceKind::detect(Some("benchy.gcode.3mf"), &bytes);
//! let metadata = extract_metadata(&bytes, kind)?;
//!
//! println!("Print time: {:?}", metadata.print_time);
//! for filament in &metadata.filaments {
//!     println!("{} {} {}", filament.material_type, filament.length_display, filament.weight_display);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod archive;
pub mod error;
pub mod model;
pub mod scanner;
pub mod time;
pub mod weight;

pub use archive::{GcodeArchive, extract_from_archive, extract_from_reader};
pub use error::{Error, Result};
pub use model::{FilamentRecord, GcodeMetadata, ScanConfig};
pub use scanner::{parse_metadata, parse_metadata_with_config};
pub use time::normalize_time;
pub use weight::{estimate_weight, estimate_weight_from_length};

use std::borrow::Cow;
use tracing::warn;

/// Leading bytes of a ZIP local file header
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// How an uploaded byte sequence should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain G-code text
    Gcode,
    /// Zip-based archive (`.3mf`, `.gcode.3mf`) embedding G-code
    Archive,
}

impl SourceKind {
    /// Guess the source kind from a file name and the leading bytes
    ///
    /// A `.3mf` or `.zip` extension selects [`SourceKind::Archive`]; without
    /// one, data starting with a ZIP header is still treated as an archive.
    ///
    /// # Example
    ///
    /// ```
    /// use gcode_meta::SourceKind;
    ///
    /// assert_eq!(SourceKind::detect(Some("cube.gcode.3mf"), b""), SourceKind::Archive);
    /// assert_eq!(SourceKind::detect(Some("cube.gcode"), b";TIME:60"), SourceKind::Gcode);
    /// assert_eq!(SourceKind::detect(None, b"PK\x03\x04rest"), SourceKind::Archive);
    /// ```
    pub fn detect(file_name: Option<&str>, bytes: &[u8]) -> Self {
        let archive_extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| {
                ext.eq_ignore_ascii_case("3mf") || ext.eq_ignore_ascii_case("zip")
            });

        if archive_extension || bytes.starts_with(ZIP_MAGIC) {
            SourceKind::Archive
        } else {
            SourceKind::Gcode
        }
    }
}

/// Extract metadata from uploaded bytes
///
/// Archives are unwrapped first and may fail with [`Error::ArchiveFormat`] or
/// [`Error::StreamNotFound`]. Plain G-code never fails; invalid UTF-8 is
/// replaced rather than rejected.
pub fn extract_metadata(bytes: &[u8], kind: SourceKind) -> Result<GcodeMetadata> {
    match kind {
        SourceKind::Archive => {
            let text = extract_from_archive(bytes)?;
            Ok(parse_metadata(&text))
        }
        SourceKind::Gcode => Ok(parse_metadata(&decode_text(bytes, "G-code upload"))),
    }
}

/// Decode UTF-8, substituting replacement characters for invalid sequences
pub(crate) fn decode_text<'a>(bytes: &'a [u8], origin: &str) -> Cow<'a, str> {
    let text = String::from_utf8_lossy(bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(origin, "invalid UTF-8 replaced while decoding G-code");
    }
    text
}
