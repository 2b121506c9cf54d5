use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use crate::ChatcastError;

/// Grid cadence in minutes.
pub const INTERVAL_MINUTES: i64 = 15;

/// Parse a span boundary date in `YYYY-MM-DD` form.
///
/// # Errors
/// Returns `Parse` if the string is not a valid calendar date.
pub fn parse_span_date(s: &str) -> Result<NaiveDate, ChatcastError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ChatcastError::parse("date", s, e.to_string()))
}

/// Whether a date falls on a Saturday or Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generate the complete 15-minute timestamp grid for a date span, excluding
/// weekend days.
///
/// Covers midnight of `start` through the end of `end` (both inclusive):
/// every interval-aligned timestamp on a business day within the span appears
/// exactly once, in ascending order. A span whose end precedes its start
/// yields an empty grid. Deterministic and idempotent for the same input.
#[must_use]
pub fn business_day_grid(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDateTime> {
    let step = TimeDelta::minutes(INTERVAL_MINUTES);
    let mut out = Vec::new();
    let mut ts = start.and_time(NaiveTime::MIN);
    while ts.date() <= end {
        if !is_weekend(ts.date()) {
            out.push(ts);
        }
        ts += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_span_date(s).unwrap()
    }

    #[test]
    fn single_weekday_has_a_full_day_of_slots() {
        // 2024-01-03 is a Wednesday: 24h * 4 slots.
        let grid = business_day_grid(d("2024-01-03"), d("2024-01-03"));
        assert_eq!(grid.len(), 96);
        assert_eq!(grid[0], d("2024-01-03").and_time(NaiveTime::MIN));
    }

    #[test]
    fn weekend_only_span_is_empty() {
        // 2024-01-06/07 is a Saturday/Sunday pair.
        assert!(business_day_grid(d("2024-01-06"), d("2024-01-07")).is_empty());
    }

    #[test]
    fn business_week_has_five_full_days() {
        // Monday through Friday.
        let grid = business_day_grid(d("2024-01-01"), d("2024-01-05"));
        assert_eq!(grid.len(), 5 * 96);
    }

    #[test]
    fn weekend_in_the_middle_is_skipped() {
        // Friday through Monday: two business days, gap of 48h + 15min
        // across the weekend boundary.
        let grid = business_day_grid(d("2024-01-05"), d("2024-01-08"));
        assert_eq!(grid.len(), 2 * 96);
        let friday_last = d("2024-01-05").and_hms_opt(23, 45, 0).unwrap();
        let monday_first = d("2024-01-08").and_time(NaiveTime::MIN);
        let pos = grid.iter().position(|&t| t == friday_last).unwrap();
        assert_eq!(grid[pos + 1], monday_first);
    }

    #[test]
    fn inverted_span_is_empty() {
        assert!(business_day_grid(d("2024-01-05"), d("2024-01-01")).is_empty());
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        assert!(parse_span_date("2024-13-01").is_err());
        assert!(parse_span_date("not a date").is_err());
    }
}
