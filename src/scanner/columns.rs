//! Per-filament columns collected while scanning, and their assembly into rows

use super::number::{format_with_unit, parse_float_prefix};
use crate::model::{FilamentRecord, ScanConfig};
use crate::weight::estimate_weight_from_length;
use tracing::trace;

/// Values of each per-filament directive, indexed by filament position
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct FilamentColumns {
    pub lengths: Vec<String>,
    pub weights: Vec<String>,
    pub types: Vec<String>,
    pub densities: Vec<String>,
    pub colors: Vec<String>,
}

/// Rows built from the columns, plus the summed mass of every resolved row
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Assembly {
    pub filaments: Vec<FilamentRecord>,
    pub total_grams: Option<f64>,
}

impl FilamentColumns {
    /// Number of filament positions declared by any usage or type column
    pub fn row_count(&self) -> usize {
        self.lengths
            .len()
            .max(self.weights.len())
            .max(self.types.len())
    }

    /// Zip the columns into filament records
    ///
    /// Positions without a length or an explicit weight are skipped. Explicit
    /// weights win over estimates; estimates use the position's density when
    /// it is numeric and the configured default otherwise.
    pub fn assemble(&self, config: &ScanConfig) -> Assembly {
        let mut assembly = Assembly::default();

        for index in 0..self.row_count() {
            let length = self.lengths.get(index);
            let density = self.densities.get(index);

            let (weight_display, grams) = match (self.weights.get(index), length) {
                (Some(raw), _) => match parse_float_prefix(raw) {
                    Some(grams) => (format_grams(grams), Some(grams)),
                    None => (format_with_unit(raw, "g"), None),
                },
                (None, Some(raw)) => match parse_float_prefix(raw) {
                    Some(length_mm) => {
                        let density = density
                            .and_then(|d| parse_float_prefix(d))
                            .unwrap_or(config.default_density());
                        let grams = estimate_weight_from_length(
                            length_mm,
                            config.filament_diameter_mm(),
                            density,
                        );
                        (format_grams(grams), Some(grams))
                    }
                    None => (String::new(), None),
                },
                (None, None) => {
                    trace!(index, "no length or weight for filament, skipping");
                    continue;
                }
            };

            if let Some(grams) = grams {
                *assembly.total_grams.get_or_insert(0.0) += grams;
            }

            let mut record = FilamentRecord::new();
            if let Some(material) = self.types.get(index) {
                record.material_type = material.clone();
            }
            record.length_display = length
                .map(|raw| format_with_unit(raw, "mm"))
                .unwrap_or_default();
            record.weight_display = weight_display;
            record.density = density.cloned();
            record.color = self.colors.get(index).cloned();
            assembly.filaments.push(record);
        }

        assembly
    }
}

/// Format a mass as `"<grams>g"` with two decimals
pub(crate) fn format_grams(grams: f64) -> String {
    format!("{:.2}g", grams)
}
