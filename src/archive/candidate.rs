//! Ranking of archive entries that may hold the G-code stream

use super::{DEFAULT_PLATE_PATH, GCODE_EXTENSION, PLATE_DIR, PLATE_PREFIX};

/// How strongly an archive entry is preferred as the G-code source
///
/// Lower values win. Multi-plate projects carry one stream per plate and
/// plate 1 is the slicer's default plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StreamPriority {
    /// `Metadata/plate_1.gcode`
    DefaultPlate = 1,
    /// `Metadata/plate_<N>.gcode` for any other N
    OtherPlate = 2,
    /// A `.gcode` file at the archive root
    RootLevel = 3,
}

/// An archive entry that matched one of the G-code naming rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCandidate {
    /// Full entry name inside the archive
    pub name: String,
    /// Rule the entry matched
    pub priority: StreamPriority,
    /// Plate number for `Metadata/plate_<N>.gcode` entries
    pub plate: Option<u32>,
    /// Position of the entry in the archive's central directory
    pub index: usize,
}

impl StreamCandidate {
    /// Classify an entry name, returning `None` when it is not a G-code stream
    pub fn classify(name: &str, index: usize) -> Option<Self> {
        let (priority, plate) = if name == DEFAULT_PLATE_PATH {
            (StreamPriority::DefaultPlate, Some(1))
        } else if let Some(number) = plate_number(name) {
            (StreamPriority::OtherPlate, number.parse().ok())
        } else if is_root_gcode(name) {
            (StreamPriority::RootLevel, None)
        } else {
            return None;
        };

        Some(Self {
            name: name.to_string(),
            priority,
            plate,
            index,
        })
    }

    /// Sort key: priority, then plate number, then archive order
    pub(crate) fn rank(&self) -> (StreamPriority, u32, usize) {
        (self.priority, self.plate.unwrap_or(u32::MAX), self.index)
    }
}

fn is_root_gcode(name: &str) -> bool {
    !name.contains('/') && name.ends_with(GCODE_EXTENSION)
}

/// Extract the digits of `Metadata/plate_<digits>.gcode`
fn plate_number(name: &str) -> Option<&str> {
    let digits = name
        .strip_prefix(PLATE_DIR)?
        .strip_prefix(PLATE_PREFIX)?
        .strip_suffix(GCODE_EXTENSION)?;
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(digits)
}
