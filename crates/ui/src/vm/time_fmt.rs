use chrono::{DateTime, NaiveDate, Utc};

/// Short numeric date, e.g. `6/3/2024`.
#[must_use]
pub fn format_date(value: DateTime<Utc>) -> String {
    value.format("%-m/%-d/%Y").to_string()
}

/// Long day heading for day groups, e.g. `Monday, June 3, 2024`.
#[must_use]
pub fn format_day_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Minute total as `{h}h {m}m`.
#[must_use]
pub fn format_hours_minutes(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    format!("{hours}h {minutes}m")
}

/// Single session duration as `{n} min`.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

/// Label for a quick-duration button: minutes under an hour as `{m}m`,
/// otherwise hours with any fractional part kept (`1h`, `1.5h`, `2h`).
#[must_use]
pub fn quick_label(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h", f64::from(minutes) / 60.0)
    } else {
        format!("{minutes}m")
    }
}
