//! Hardcoded US federal holiday calendar, 2023–2026.
//!
//! The model treats each holiday as a named regressor with one occurrence per
//! covered year. Statutory dates only; observed-shift days are not included.

use std::collections::HashMap;

use augurs::prophet::{Holiday, HolidayOccurrence, TimestampSeconds};
use chrono::{NaiveDate, NaiveTime};

/// Midnight UTC of a calendar day, as epoch seconds.
fn day(y: i32, m: u32, d: u32) -> TimestampSeconds {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid holiday date")
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp()
}

fn holiday(dates: &[(i32, u32, u32)]) -> Holiday {
    Holiday::new(
        dates
            .iter()
            .map(|&(y, m, d)| HolidayOccurrence::for_day(day(y, m, d)))
            .collect(),
    )
}

/// The US federal holiday calendar fed to the model as holiday regressors.
#[must_use]
pub fn us_federal_holidays() -> HashMap<String, Holiday> {
    let table: &[(&str, &[(i32, u32, u32)])] = &[
        (
            "New Year's Day",
            &[(2023, 1, 1), (2024, 1, 1), (2025, 1, 1), (2026, 1, 1)],
        ),
        (
            "Martin Luther King Jr. Day",
            &[(2023, 1, 16), (2024, 1, 15), (2025, 1, 20), (2026, 1, 19)],
        ),
        (
            "Washington's Birthday",
            &[(2023, 2, 20), (2024, 2, 19), (2025, 2, 17), (2026, 2, 16)],
        ),
        (
            "Memorial Day",
            &[(2023, 5, 29), (2024, 5, 27), (2025, 5, 26), (2026, 5, 25)],
        ),
        (
            "Juneteenth",
            &[(2023, 6, 19), (2024, 6, 19), (2025, 6, 19), (2026, 6, 19)],
        ),
        (
            "Independence Day",
            &[(2023, 7, 4), (2024, 7, 4), (2025, 7, 4), (2026, 7, 4)],
        ),
        (
            "Labor Day",
            &[(2023, 9, 4), (2024, 9, 2), (2025, 9, 1), (2026, 9, 7)],
        ),
        (
            "Columbus Day",
            &[(2023, 10, 9), (2024, 10, 14), (2025, 10, 13), (2026, 10, 12)],
        ),
        (
            "Veterans Day",
            &[(2023, 11, 11), (2024, 11, 11), (2025, 11, 11), (2026, 11, 11)],
        ),
        (
            "Thanksgiving",
            &[(2023, 11, 23), (2024, 11, 28), (2025, 11, 27), (2026, 11, 26)],
        ),
        (
            "Christmas Day",
            &[(2023, 12, 25), (2024, 12, 25), (2025, 12, 25), (2026, 12, 25)],
        ),
    ];

    table
        .iter()
        .map(|&(name, dates)| (name.to_string(), holiday(dates)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_has_all_eleven_federal_holidays() {
        let holidays = us_federal_holidays();
        assert_eq!(holidays.len(), 11);
        assert!(holidays.contains_key("Thanksgiving"));
        assert!(holidays.contains_key("Independence Day"));
    }
}
