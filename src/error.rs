//! Error types for G-code metadata extraction
//!
//! Only the archive path can fail. Scanning toolpath text is best-effort and
//! never produces an error, so everything here concerns opening a zip
//! container and locating the embedded G-code stream.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//!
//! ## Common Error Codes
//!
//! - `E1002`: Bytes are not a valid ZIP archive, or an entry is corrupt
//! - `E1003`: No G-code stream inside the archive

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when unwrapping a G-code archive
#[derive(Error, Debug)]
pub enum Error {
    /// The byte sequence is not a ZIP structure
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Plain G-code text routed to the archive path
    /// - Corrupted or truncated `.3mf` download
    /// - Entry data failing its CRC check
    /// - Read failure on a caller-supplied reader
    /// - Unsupported compression method
    ///
    /// **Suggestions**:
    /// - Upload the file as plain G-code instead
    /// - Re-export the project from the slicer
    #[error("[E1002] Not a valid archive: {0}")]
    ArchiveFormat(#[from] zip::result::ZipError),

    /// Valid archive, but no entry matches any G-code location
    ///
    /// **Error Code**: E1003
    ///
    /// **Common Causes**:
    /// - A project `.3mf` that was saved without slicing
    /// - G-code stored in a nested folder other than `Metadata/`
    ///
    /// **Suggestions**:
    /// - Slice the plate and export it as `.gcode.3mf`
    #[error("[E1003] No G-code found inside archive: {0}")]
    StreamNotFound(String),
}

impl Error {
    /// Create a StreamNotFound error naming where the stream was expected
    ///
    /// # Arguments
    /// * `expected` - The archive path a sliced file is expected to carry
    pub fn stream_not_found(expected: &str) -> Self {
        Error::StreamNotFound(format!(
            "expected '{}' or a top-level '.gcode' file",
            expected
        ))
    }

    /// True when the input is not a ZIP archive or its G-code entry is corrupt
    pub fn is_archive_format(&self) -> bool {
        matches!(self, Error::ArchiveFormat(_))
    }

    /// True when the archive opened but held no G-code stream
    pub fn is_stream_not_found(&self) -> bool {
        matches!(self, Error::StreamNotFound(_))
    }
}
