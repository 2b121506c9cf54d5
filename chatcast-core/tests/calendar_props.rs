use chatcast_core::{INTERVAL_MINUTES, business_day_grid};
use chrono::{Datelike, Days, NaiveDate, NaiveTime, TimeDelta, Weekday};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

fn arb_span() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..3000, 0u64..40).prop_map(|(offset, span)| {
        let start = base_date() + Days::new(offset);
        (start, start + Days::new(span))
    })
}

fn business_days(start: NaiveDate, end: NaiveDate) -> usize {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count()
}

proptest! {
    #[test]
    fn grid_has_no_weekend_entries((start, end) in arb_span()) {
        for ts in business_day_grid(start, end) {
            prop_assert!(!matches!(ts.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn grid_is_strictly_ascending((start, end) in arb_span()) {
        let grid = business_day_grid(start, end);
        for pair in grid.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn adjacent_entries_are_one_interval_apart_except_at_weekends((start, end) in arb_span()) {
        let step = TimeDelta::minutes(INTERVAL_MINUTES);
        let grid = business_day_grid(start, end);
        for pair in grid.windows(2) {
            let gap = pair[1] - pair[0];
            if gap != step {
                // The only allowed larger gap is the excluded weekend:
                // Friday 23:45 straight to Monday 00:00.
                prop_assert_eq!(pair[0].weekday(), Weekday::Fri);
                prop_assert_eq!(pair[1].weekday(), Weekday::Mon);
                prop_assert_eq!(pair[0].time(), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
                prop_assert_eq!(pair[1].time(), NaiveTime::MIN);
                prop_assert_eq!(gap, TimeDelta::days(2) + step);
            }
        }
    }

    #[test]
    fn grid_covers_every_business_day_completely((start, end) in arb_span()) {
        let grid = business_day_grid(start, end);
        let slots_per_day = (24 * 60 / INTERVAL_MINUTES) as usize;
        prop_assert_eq!(grid.len(), business_days(start, end) * slots_per_day);
    }

    #[test]
    fn grid_is_deterministic((start, end) in arb_span()) {
        prop_assert_eq!(business_day_grid(start, end), business_day_grid(start, end));
    }
}
