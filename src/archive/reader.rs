//! Archive opening and stream selection

use super::DEFAULT_PLATE_PATH;
use super::candidate::{StreamCandidate, StreamPriority};
use crate::decode_text;
use crate::error::{Error, Result};
use std::io::{Cursor, Read, Seek};
use tracing::debug;
use zip::ZipArchive;
use zip::result::ZipError;

/// A zip-based print archive (`.3mf`, `.gcode.3mf`) opened for reading
pub struct GcodeArchive<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> GcodeArchive<R> {
    /// Open an archive from a reader
    ///
    /// Fails with [`Error::ArchiveFormat`] when the data is not a ZIP file.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        debug!(entries = archive.len(), "opened archive");
        Ok(Self { archive })
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// All entries that may hold G-code, best candidate first
    pub fn candidates(&self) -> Vec<StreamCandidate> {
        let mut candidates: Vec<StreamCandidate> = self
            .archive
            .file_names()
            .enumerate()
            .filter_map(|(index, name)| StreamCandidate::classify(name, index))
            .collect();
        candidates.sort_by_key(StreamCandidate::rank);
        candidates
    }

    /// Per-plate streams under `Metadata/`, ordered by plate number
    pub fn plate_streams(&self) -> Vec<StreamCandidate> {
        self.candidates()
            .into_iter()
            .filter(|c| c.priority != StreamPriority::RootLevel)
            .collect()
    }

    /// Read a named entry and decode it as text
    ///
    /// Entry data that fails to inflate or to match its checksum is reported as
    /// [`Error::ArchiveFormat`].
    pub fn read_stream(&mut self, name: &str) -> Result<String> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => {
                Error::StreamNotFound(format!("'{}' is not in the archive", name))
            }
            other => Error::ArchiveFormat(other),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| Error::ArchiveFormat(ZipError::Io(e)))?;
        Ok(decode_text(&bytes, name).into_owned())
    }

    /// Read the highest-priority G-code stream
    ///
    /// Fails with [`Error::StreamNotFound`] when no entry matches.
    pub fn read_best_stream(&mut self) -> Result<String> {
        let best = self
            .candidates()
            .into_iter()
            .next()
            .ok_or_else(|| Error::stream_not_found(DEFAULT_PLATE_PATH))?;
        debug!(name = %best.name, priority = ?best.priority, "selected G-code stream");
        self.read_stream(&best.name)
    }
}

/// Extract the embedded G-code text from archive bytes
///
/// # Example
///
/// ```no_run
/// use gcode_meta::extract_from_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = std::fs::read("benchy.gcode.3mf")?;
/// let gcode = extract_from_archive(&bytes)?;
/// println!("{} bytes of G-code", gcode.len());
/// # Ok(())
/// # }
/// ```
pub fn extract_from_archive(bytes: &[u8]) -> Result<String> {
    extract_from_reader(Cursor::new(bytes))
}

/// Extract the embedded G-code text from an archive reader, e.g. an open file
pub fn extract_from_reader<R: Read + Seek>(reader: R) -> Result<String> {
    GcodeArchive::open(reader)?.read_best_stream()
}
