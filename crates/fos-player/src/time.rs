//! Time display and progress math
//!
//! Everything here returns finite values: an unknown or zero duration reads
//! as 0 rather than leaking NaN into the controls.

/// `part` as a percentage of `whole`, 0 when not finite
pub fn percent(part: f64, whole: f64) -> f64 {
    let value = 100.0 * part / whole;
    if value.is_finite() { value } else { 0.0 }
}

/// CSS percentage for a style custom property (`50%`)
pub fn css_percent(value: f64) -> String {
    format!("{}%", if value.is_finite() { value } else { 0.0 })
}

/// `MM:SS` with floored minutes and seconds; minutes do not wrap into hours
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// `current / duration` text for the time display
pub fn time_display(current: f64, duration: f64) -> String {
    format!("{} / {}", format_clock(current), format_clock(duration))
}
