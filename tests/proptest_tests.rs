//! Property-based tests for gcode-meta
//!
//! These tests use proptest to generate arbitrary durations, filament
//! parameters and G-code text, and verify invariants hold across a wide range
//! of inputs.

mod common;

use common::filler_lines;
use gcode_meta::{estimate_weight_from_length, extract_from_archive, normalize_time, parse_metadata};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// A header directive line with arbitrary numeric values
fn directive_strategy() -> impl Strategy<Value = String> {
    let values = prop::collection::vec(0.0f64..100_000.0, 1..5).prop_map(|values| {
        values
            .iter()
            .map(|v| format!("{:.2}", v))
            .collect::<Vec<_>>()
            .join(",")
    });
    (0usize..5, values).prop_map(|(kind, values)| match kind {
        0 => format!("; total filament length [mm] : {}", values),
        1 => format!("; total filament weight [g] : {}", values),
        2 => format!("; filament_density: {}", values),
        3 => format!("; filament_type = {}", values.replace(',', ";")),
        _ => format!(";TIME:{}", values.len()),
    })
}

/// A header mixing directives with motion commands and junk
fn header_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            directive_strategy(),
            Just("G1 X10 Y10 E0.5".to_string()),
            "[ -~]{0,60}",
        ],
        0..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

// ============================================================================
// Time normalizer
// ============================================================================

proptest! {
    #[test]
    fn normalize_time_is_never_empty(seconds in any::<u64>()) {
        prop_assert!(!normalize_time(seconds).is_empty());
    }

    #[test]
    fn hours_never_show_seconds(seconds in 3600u64..10_000_000) {
        let formatted = normalize_time(seconds);
        prop_assert!(formatted.contains('h'));
        prop_assert!(!formatted.ends_with('s'), "{} -> {}", seconds, formatted);
    }

    #[test]
    fn sub_hour_durations_are_exact(seconds in 1u64..3600) {
        let total: u64 = normalize_time(seconds)
            .split(' ')
            .map(|part| {
                let (value, unit) = part.split_at(part.len() - 1);
                let value: u64 = value.parse().unwrap();
                if unit == "m" { value * 60 } else { value }
            })
            .sum();
        prop_assert_eq!(total, seconds);
    }
}

// ============================================================================
// Weight estimator
// ============================================================================

proptest! {
    #[test]
    fn weight_grows_with_diameter(
        length in 1.0f64..100_000.0,
        diameter in 0.5f64..3.0,
        extra in 0.01f64..1.0,
        density in 0.5f64..3.0,
    ) {
        prop_assert!(
            estimate_weight_from_length(length, diameter + extra, density)
                > estimate_weight_from_length(length, diameter, density)
        );
    }

    #[test]
    fn weight_grows_with_density(
        length in 1.0f64..100_000.0,
        diameter in 0.5f64..3.0,
        density in 0.5f64..3.0,
        extra in 0.01f64..1.0,
    ) {
        prop_assert!(
            estimate_weight_from_length(length, diameter, density + extra)
                > estimate_weight_from_length(length, diameter, density)
        );
    }

    #[test]
    fn zero_length_weighs_nothing(diameter in 0.5f64..3.0, density in 0.5f64..3.0) {
        prop_assert_eq!(estimate_weight_from_length(0.0, diameter, density), 0.0);
    }
}

// ============================================================================
// Scanner
// ============================================================================

proptest! {
    #[test]
    fn scanning_arbitrary_text_is_deterministic(text in "\\PC{0,400}") {
        prop_assert_eq!(parse_metadata(&text), parse_metadata(&text));
    }

    #[test]
    fn filament_count_is_bounded_by_columns(header in header_strategy()) {
        let metadata = parse_metadata(&header);
        prop_assert!(metadata.filaments.len() <= 4);
        for filament in &metadata.filaments {
            prop_assert!(!filament.length_display.is_empty() || !filament.weight_display.is_empty());
        }
    }

    #[test]
    fn lines_past_the_window_are_ignored(header in header_strategy(), tail in header_strategy()) {
        let mut text = header.clone();
        text.push('\n');
        text.push_str(&filler_lines(200));
        let baseline = parse_metadata(&text);

        text.push_str(&tail);
        prop_assert_eq!(parse_metadata(&text), baseline);
    }

    #[test]
    fn total_weight_present_when_filaments_resolved(header in header_strategy()) {
        let metadata = parse_metadata(&header);
        let any_weight = metadata.filaments.iter().any(|f| !f.weight_display.is_empty());
        prop_assert_eq!(metadata.total_filament_weight.is_some(), any_weight);
    }
}

// ============================================================================
// Archive unwrapper
// ============================================================================

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = extract_from_archive(&bytes);
    }
}
