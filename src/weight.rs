//! Filament mass estimation from extruded length
//!
//! Slicers do not always report the mass of filament used. When only a length
//! is known, the filament is modelled as a solid cylinder and its mass derived
//! from the material density.

use std::f64::consts::PI;

/// Filament diameter assumed when none is known, in millimetres
pub const DEFAULT_FILAMENT_DIAMETER_MM: f64 = 1.75;

/// Material density assumed when none is known, in g/cm³ (typical PLA)
pub const DEFAULT_FILAMENT_DENSITY: f64 = 1.24;

const MM3_PER_CM3: f64 = 1000.0;

/// Estimate the mass in grams of a length of filament
///
/// # Arguments
///
/// * `length_mm` - Filament length in millimetres (non-negative)
/// * `diameter_mm` - Filament diameter in millimetres
/// * `density_g_per_cm3` - Material density in g/cm³
///
/// # Example
///
/// ```
/// use gcode_meta::estimate_weight_from_length;
///
/// let grams = estimate_weight_from_length(1000.0, 1.75, 1.24);
/// assert!((grams - 2.98).abs() < 0.01);
/// ```
pub fn estimate_weight_from_length(
    length_mm: f64,
    diameter_mm: f64,
    density_g_per_cm3: f64,
) -> f64 {
    let radius = diameter_mm / 2.0;
    let volume_mm3 = PI * radius * radius * length_mm;
    volume_mm3 / MM3_PER_CM3 * density_g_per_cm3
}

/// Estimate mass using the default 1.75mm diameter and PLA density
pub fn estimate_weight(length_mm: f64) -> f64 {
    estimate_weight_from_length(
        length_mm,
        DEFAULT_FILAMENT_DIAMETER_MM,
        DEFAULT_FILAMENT_DENSITY,
    )
}
