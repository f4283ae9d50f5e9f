//! Compact duration formatting for print time estimates

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format a number of seconds as a compact duration such as `"1h 2m"`
///
/// Components are written in `h`, `m`, `s` order, zero components are left
/// out, and the result is never empty (`0` formats as `"0s"`).
///
/// Durations of an hour or more never show seconds. Leftover seconds round the
/// minute count up instead of being truncated, carrying into the hour when the
/// minutes reach 60.
///
/// # Examples
///
/// ```
/// use gcode_meta::normalize_time;
///
/// assert_eq!(normalize_time(0), "0s");
/// assert_eq!(normalize_time(90), "1m 30s");
/// assert_eq!(normalize_time(3661), "1h 2m");
/// assert_eq!(normalize_time(86400), "24h");
/// ```
pub fn normalize_time(total_seconds: u64) -> String {
    if total_seconds == 0 {
        return "0s".to_string();
    }

    let mut hours = total_seconds / SECONDS_PER_HOUR;
    let mut minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let mut seconds = total_seconds % SECONDS_PER_MINUTE;

    if hours > 0 && seconds > 0 {
        minutes += 1;
        seconds = 0;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }
    }

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}
