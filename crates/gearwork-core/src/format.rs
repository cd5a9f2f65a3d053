//! Wall-clock text for the digital readout.
//!
//! Wrapping to a day happens here and only here; the kinematic model always
//! sees the raw, continuous time value.

use chrono::{NaiveTime, Timelike};

use crate::theme::TimeFormat;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Format `time_seconds` as a wall-clock string.
///
/// Twelve-hour output looks like `"PM 01:05:30"`, twenty-four-hour output
/// like `"13:05:30"`. Negative time wraps backwards from midnight.
pub fn format_clock(time_seconds: f64, format: TimeFormat) -> String {
    let wrapped = if time_seconds.is_finite() {
        time_seconds.rem_euclid(SECONDS_PER_DAY)
    } else {
        0.0
    };
    // Truncation is safe: wrapped is in [0, 86400]
    let total = (wrapped.floor() as u32) % 86_400;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    match format {
        TimeFormat::TwentyFourHour => format!("{hours:02}:{minutes:02}:{seconds:02}"),
        TimeFormat::TwelveHour => {
            let period = if hours >= 12 { "PM" } else { "AM" };
            let hours = match hours % 12 {
                0 => 12,
                h => h,
            };
            format!("{period} {hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

/// Seconds elapsed since midnight, including the fractional part.
pub fn seconds_since_midnight(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) + f64::from(time.nanosecond() % 1_000_000_000) / 1e9
}
