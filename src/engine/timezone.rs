//! UTC offsets and local dates for the configured IANA zone.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

/// Offset of `tz` from UTC at `instant`, as `±HH:MM`.
///
/// DST moves this around, so callers resolve it once per run rather than
/// caching it across runs.
pub fn offset_for(tz: Tz, instant: DateTime<Utc>) -> String {
    let seconds = tz
        .offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc();
    format_offset(seconds)
}

/// Seconds east of UTC -> `±HH:MM`, rounded to the nearest minute.
pub fn format_offset(seconds: i32) -> String {
    let minutes = (f64::from(seconds) / 60.0).round() as i32;
    let sign = if minutes >= 0 { '+' } else { '-' };
    let minutes = minutes.abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// `yyyy-MM-dd` of `instant` on the wall clock in `tz`.
pub fn local_date(tz: Tz, instant: DateTime<Utc>) -> String {
    instant.with_timezone(&tz).format("%Y-%m-%d").to_string()
}
