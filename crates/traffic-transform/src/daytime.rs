//! Day and clock-time parsing for the time-span table.
//!
//! Span rows name their day either as a weekday ("Monday", "mon") or as a
//! calendar date. Weekday names are placed on a fixed anchor week so that
//! two rows naming the same weekday always land on the same date.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Combine a day cell and a time cell into one timestamp.
///
/// Returns `None` when either side fails to parse. An empty time cell means
/// midnight; an empty day cell is a parse failure.
pub fn combine_day_time(day: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_day(day)?;
    let time = parse_time(time)?;
    Some(date.and_time(time))
}

/// Parse a day cell as a weekday name or a calendar date.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(weekday) = trimmed.parse::<Weekday>() {
        return weekday_date(weekday);
    }

    let formats = [
        "%Y-%m-%d", // ISO: 2024-01-15
        "%Y/%m/%d",
        "%m/%d/%Y", // US: 01/15/2024
    ];
    for fmt in &formats {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }

    None
}

/// Parse a time cell. An empty cell means midnight.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(NaiveTime::MIN);
    }

    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
}

/// Date of the given weekday in the anchor week.
fn weekday_date(weekday: Weekday) -> Option<NaiveDate> {
    // 2024-01-01 is a Monday.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1)?;
    let offset = i64::from(weekday.num_days_from_monday());
    monday.checked_add_signed(Duration::days(offset))
}
