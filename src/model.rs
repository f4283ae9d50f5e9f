//! Data structures for extracted print metadata

use crate::weight::{DEFAULT_FILAMENT_DENSITY, DEFAULT_FILAMENT_DIAMETER_MM};

/// Material name used when the source does not declare a filament type
pub const UNKNOWN_MATERIAL: &str = "Unknown";

/// Number of leading lines examined by default
pub const DEFAULT_MAX_LINES: usize = 200;

/// Scanner configuration
///
/// The defaults suit BambuStudio and Cura output for 1.75mm printers.
///
/// # Example
///
/// ```
/// use gcode_meta::ScanConfig;
///
/// let config = ScanConfig::new()
///     .with_filament_diameter(2.85)
///     .with_max_lines(500);
/// assert_eq!(config.max_lines(), 500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    max_lines: usize,
    filament_diameter_mm: f64,
    default_density: f64,
}

impl ScanConfig {
    /// Create a configuration with the default limits
    pub fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            filament_diameter_mm: DEFAULT_FILAMENT_DIAMETER_MM,
            default_density: DEFAULT_FILAMENT_DENSITY,
        }
    }

    /// Scan at most `max_lines` lines from the start of the file
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Filament diameter used when estimating mass from length
    pub fn with_filament_diameter(mut self, diameter_mm: f64) -> Self {
        self.filament_diameter_mm = diameter_mm;
        self
    }

    /// Density used when a filament declares none
    pub fn with_default_density(mut self, density_g_per_cm3: f64) -> Self {
        self.default_density = density_g_per_cm3;
        self
    }

    /// Maximum number of lines scanned
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Filament diameter in millimetres
    pub fn filament_diameter_mm(&self) -> f64 {
        self.filament_diameter_mm
    }

    /// Fallback density in g/cm³
    pub fn default_density(&self) -> f64 {
        self.default_density
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Usage of one filament (extruder or AMS slot) in a print
///
/// Display strings are pre-formatted the way they are shown to users:
/// lengths as `"1229.28mm"`, weights as `"3.73g"`. An empty string means the
/// value could not be determined.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FilamentRecord {
    /// Material type such as "PLA" or "PETG"
    pub material_type: String,
    /// Formatted length in millimetres
    pub length_display: String,
    /// Formatted mass in grams, explicit or estimated
    pub weight_display: String,
    /// Density token exactly as found in the file
    pub density: Option<String>,
    /// Hex color token exactly as found in the file
    pub color: Option<String>,
}

impl FilamentRecord {
    /// Create a record of unknown material with no usage data
    pub fn new() -> Self {
        Self {
            material_type: UNKNOWN_MATERIAL.to_string(),
            length_display: String::new(),
            weight_display: String::new(),
            density: None,
            color: None,
        }
    }
}

impl Default for FilamentRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata recovered from a G-code header
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GcodeMetadata {
    /// Human-readable estimated print time, e.g. `"1h 2m"`
    pub print_time: Option<String>,
    /// Estimated print time in seconds, as declared by the slicer
    pub print_time_seconds: Option<u64>,
    /// Filaments in the order the slicer declared them
    pub filaments: Vec<FilamentRecord>,
    /// Sum of all resolved filament masses, e.g. `"18.00g"`
    pub total_filament_weight: Option<String>,
}

impl GcodeMetadata {
    /// Create an empty metadata record
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no time or filament information was recognized
    pub fn is_empty(&self) -> bool {
        self.print_time.is_none()
            && self.filaments.is_empty()
            && self.total_filament_weight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filament_is_unknown() {
        let record = FilamentRecord::new();
        assert_eq!(record.material_type, "Unknown");
        assert!(record.length_display.is_empty());
        assert!(record.weight_display.is_empty());
        assert_eq!(record.density, None);
        assert_eq!(record.color, None);
    }

    #[test]
    fn test_metadata_is_empty() {
        let mut metadata = GcodeMetadata::new();
        assert!(metadata.is_empty());

        metadata.print_time = Some("5m".to_string());
        assert!(!metadata.is_empty());
    }

    #[test]
    fn test_scan_config_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.max_lines(), 200);
        assert_eq!(config.filament_diameter_mm(), 1.75);
        assert_eq!(config.default_density(), 1.24);
    }

    #[test]
    fn test_scan_config_builder() {
        let config = ScanConfig::new()
            .with_max_lines(50)
            .with_filament_diameter(2.85)
            .with_default_density(1.27);
        assert_eq!(config.max_lines(), 50);
        assert_eq!(config.filament_diameter_mm(), 2.85);
        assert_eq!(config.default_density(), 1.27);
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GcodeMetadata>();
        assert_send_sync::<FilamentRecord>();
    }
}
