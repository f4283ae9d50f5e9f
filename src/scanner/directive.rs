//! Recognition of slicer header comments
//!
//! Two dialect families are understood. BambuStudio-style headers carry
//! `total estimated time`, `total filament length [mm]`, `total filament
//! weight [g]` and the per-filament `filament_*` settings. Cura-style headers
//! carry `;TIME:<seconds>` and `;Filament used: <metres>m`.
//!
//! Each dialect is a set of recognizers tried in a fixed order; the first one
//! that accepts a line decides what the line means.

/// Slicer convention a print time was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    Bambu,
    Cura,
}

/// A recognized header comment
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Directive {
    PrintTime { seconds: u64, dialect: Dialect },
    FilamentLengths(Vec<String>),
    FilamentWeights(Vec<String>),
    FilamentTypes(Vec<String>),
    FilamentDensities(Vec<String>),
    FilamentColors(Vec<String>),
}

impl Directive {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Directive::PrintTime { dialect: Dialect::Bambu, .. } => "total estimated time",
            Directive::PrintTime { dialect: Dialect::Cura, .. } => "TIME",
            Directive::FilamentLengths(_) => "filament length",
            Directive::FilamentWeights(_) => "filament weight",
            Directive::FilamentTypes(_) => "filament type",
            Directive::FilamentDensities(_) => "filament density",
            Directive::FilamentColors(_) => "filament color",
        }
    }
}

const ESTIMATED_TIME_LABEL: &str = "total estimated time:";
const CURA_TIME_KEY: &str = "time:";
const TOTAL_LENGTH_KEY: &str = "total filament length [mm]";
const TOTAL_WEIGHT_KEY: &str = "total filament weight [g]";
const FILAMENT_TYPE_KEY: &str = "filament_type";
const FILAMENT_DENSITY_KEY: &str = "filament_density";
const FILAMENT_COLOR_LABELS: [&str; 2] = ["filament_colour =", "filament_color ="];
const CURA_FILAMENT_USED_KEY: &str = "filament used:";

const METRES_TO_MM: f64 = 1000.0;

/// A trimmed header line with its ASCII-lowercased twin
///
/// ASCII lowercasing keeps byte offsets, so positions found in `lower` index
/// `text` directly.
struct Line<'a> {
    text: &'a str,
    lower: String,
}

impl<'a> Line<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_ascii_lowercase(),
        }
    }

    /// Byte offset of the comment key, after `;` and any spaces
    fn key_offset(&self) -> Option<usize> {
        let body = self.text.strip_prefix(';')?.trim_start();
        Some(self.text.len() - body.len())
    }

    /// Text following `;<key>`, matching the key case-insensitively
    fn after_key(&self, key: &str) -> Option<&'a str> {
        let offset = self.key_offset()?;
        self.lower[offset..]
            .starts_with(key)
            .then(|| &self.text[offset + key.len()..])
    }

    /// Text following `;<key>`, matching the key exactly
    fn after_key_exact(&self, key: &str) -> Option<&'a str> {
        let offset = self.key_offset()?;
        self.text[offset..].strip_prefix(key)
    }

    /// Text following the first occurrence of `label` anywhere in the line
    fn after_label(&self, label: &str) -> Option<&'a str> {
        let pos = self.lower.find(label)?;
        Some(&self.text[pos + label.len()..])
    }
}

type Recognizer = fn(&Line<'_>) -> Option<Directive>;

const RECOGNIZERS: [Recognizer; 8] = [
    estimated_time,
    cura_time,
    total_filament_length,
    total_filament_weight,
    filament_type,
    filament_density,
    filament_color,
    cura_filament_used,
];

/// Interpret one trimmed line, returning `None` for anything unrecognized
pub(crate) fn recognize(text: &str) -> Option<Directive> {
    let line = Line::new(text);
    RECOGNIZERS.iter().find_map(|recognizer| recognizer(&line))
}

fn estimated_time(line: &Line<'_>) -> Option<Directive> {
    let rest = line.after_label(ESTIMATED_TIME_LABEL)?;
    Some(Directive::PrintTime {
        seconds: parse_duration(rest),
        dialect: Dialect::Bambu,
    })
}

fn cura_time(line: &Line<'_>) -> Option<Directive> {
    let rest = line.after_key(CURA_TIME_KEY)?.trim_start();
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let seconds = rest[..digits].parse().ok()?;
    Some(Directive::PrintTime {
        seconds,
        dialect: Dialect::Cura,
    })
}

fn total_filament_length(line: &Line<'_>) -> Option<Directive> {
    let (_, value) = line.after_key(TOTAL_LENGTH_KEY)?.split_once(':')?;
    Some(Directive::FilamentLengths(split_list(value)))
}

fn total_filament_weight(line: &Line<'_>) -> Option<Directive> {
    let (_, value) = line.after_key_exact(TOTAL_WEIGHT_KEY)?.split_once(':')?;
    Some(Directive::FilamentWeights(split_list(value)))
}

fn filament_type(line: &Line<'_>) -> Option<Directive> {
    let (_, value) = line.after_key(FILAMENT_TYPE_KEY)?.split_once('=')?;
    Some(Directive::FilamentTypes(split_list(value)))
}

fn filament_density(line: &Line<'_>) -> Option<Directive> {
    let (_, value) = line.after_key(FILAMENT_DENSITY_KEY)?.split_once(':')?;
    Some(Directive::FilamentDensities(split_list(value)))
}

fn filament_color(line: &Line<'_>) -> Option<Directive> {
    // `filament_colour_type` is a sibling setting, not a color list
    if line.lower.contains("_type") {
        return None;
    }
    let value = FILAMENT_COLOR_LABELS
        .iter()
        .find_map(|label| line.after_label(label))?;
    Some(Directive::FilamentColors(split_list(value)))
}

fn cura_filament_used(line: &Line<'_>) -> Option<Directive> {
    let rest = line.after_key(CURA_FILAMENT_USED_KEY)?;
    let mut any_metres = false;
    // Unreadable items keep their raw text so later extruders stay aligned
    let lengths: Vec<String> = rest
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match metres_to_mm(item) {
            Some(mm) => {
                any_metres = true;
                mm.to_string()
            }
            None => item.to_string(),
        })
        .collect();
    any_metres.then_some(Directive::FilamentLengths(lengths))
}

/// Millimetres in a `<number>m` item
fn metres_to_mm(item: &str) -> Option<f64> {
    let metres = item
        .strip_suffix('m')
        .or_else(|| item.strip_suffix('M'))?
        .trim_end();
    let metres: f64 = metres.parse().ok()?;
    Some(metres * METRES_TO_MM)
}

/// Split a directive value into its per-filament items
///
/// Values holding a `;` are split on `;`, anything else on `,`. Items are
/// trimmed and empty items dropped.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    let delimiter = if value.contains(';') { ';' } else { ',' };
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Seconds in `[<N>d] [<N>h] [<N>m] [<N>s]`, components in that order
///
/// Missing components count as zero; reading stops at the first token that
/// does not fit the sequence.
pub(crate) fn parse_duration(text: &str) -> u64 {
    const UNITS: [(u8, u64); 4] = [(b'd', 86_400), (b'h', 3_600), (b'm', 60), (b's', 1)];

    let mut rest = text.trim_start();
    let mut total: u64 = 0;
    let mut next_unit = 0;

    while next_unit < UNITS.len() {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let Some(unit) = rest.as_bytes().get(digits).map(u8::to_ascii_lowercase) else {
            break;
        };
        let Some(offset) = UNITS[next_unit..].iter().position(|(u, _)| *u == unit) else {
            break;
        };
        let Ok(value) = rest[..digits].parse::<u64>() else {
            break;
        };

        let scale = UNITS[next_unit + offset].1;
        total = total.saturating_add(value.saturating_mul(scale));
        next_unit += offset + 1;
        rest = rest[digits + 1..].trim_start();
    }

    total
}
