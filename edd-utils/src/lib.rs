//! Shared utility functions for EDD crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Truncate a local timestamp to its calendar day.
    pub fn start_of_day(instant: &DateTime<Local>) -> NaiveDate {
        instant.naive_local().date()
    }

    /// The current calendar day in the host-local timezone.
    ///
    /// This is the only place an instant becomes a calendar day; everything
    /// downstream works on NaiveDate.
    pub fn today_local() -> NaiveDate {
        start_of_day(&Local::now())
    }

    /// Shift a date by a signed number of days.
    pub fn add_days(date: &NaiveDate, amount: i64) -> NaiveDate {
        *date + Duration::days(amount)
    }

    /// Get the Sunday that starts the week containing the given date.
    /// A Sunday maps to itself.
    pub fn start_of_week(date: &NaiveDate) -> NaiveDate {
        let days_from_sunday = date.weekday().num_days_from_sunday() as i64;
        *date - Duration::days(days_from_sunday)
    }

    /// Signed number of whole calendar weeks from `b` to `a`, comparing
    /// Sunday-anchored week starts. Positive when `a` falls in a later week.
    ///
    /// Both week starts are Sundays, so the day difference is always an
    /// exact multiple of seven.
    pub fn calendar_weeks_between(a: &NaiveDate, b: &NaiveDate) -> i64 {
        let start_a = start_of_week(a);
        let start_b = start_of_week(b);
        (start_a - start_b).num_days() / 7
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, TimeZone};

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2025-11-24");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);

            assert!(parse_date("not-a-date").is_err());
            assert!(parse_date("2025-13-01").is_err());
        }

        #[test]
        fn test_start_of_day() {
            let noon = chrono::Local
                .with_ymd_and_hms(2025, 11, 24, 12, 0, 0)
                .unwrap();
            let expected = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
            assert_eq!(start_of_day(&noon), expected);
        }

        #[test]
        fn test_add_days() {
            let date = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
            assert_eq!(
                add_days(&date, 33),
                NaiveDate::from_ymd_opt(2026, 1, 24).unwrap()
            );
            assert_eq!(
                add_days(&date, -140),
                NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()
            );
            assert_eq!(add_days(&date, 0), date);
        }

        #[test]
        fn test_start_of_week() {
            // 2025-11-23 is a Sunday, 2025-11-24 a Monday, 2025-11-29 a Saturday
            let sunday = NaiveDate::from_ymd_opt(2025, 11, 23).unwrap();
            let monday = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
            let saturday = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();

            assert_eq!(start_of_week(&sunday), sunday);
            assert_eq!(start_of_week(&monday), sunday);
            assert_eq!(start_of_week(&saturday), sunday);
        }

        #[test]
        fn test_calendar_weeks_between() {
            let due = NaiveDate::from_ymd_opt(2025, 12, 22).unwrap();
            let today = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
            assert_eq!(calendar_weeks_between(&due, &today), 4);
            assert_eq!(calendar_weeks_between(&today, &due), -4);

            // same calendar week regardless of day spacing
            let saturday = NaiveDate::from_ymd_opt(2025, 11, 29).unwrap();
            assert_eq!(calendar_weeks_between(&saturday, &today), 0);

            // adjacent days on either side of a Sunday boundary are a week apart
            let before_boundary = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
            let after_boundary = NaiveDate::from_ymd_opt(2025, 11, 23).unwrap();
            assert_eq!(calendar_weeks_between(&after_boundary, &before_boundary), 1);
            assert_eq!(calendar_weeks_between(&before_boundary, &after_boundary), -1);
        }
    }
}

/// Percentage formatting for table and card output
pub mod percent {
    /// Format a fraction as a percentage string with a fixed number of
    /// decimals, e.g. 0.1234 -> "12.34%". Non-finite values render as "0%".
    pub fn format_percent(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return "0%".to_string();
        }
        format!("{:.*}%", decimals, value * 100.0)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_percent() {
            assert_eq!(format_percent(0.1234, 2), "12.34%");
            assert_eq!(format_percent(0.0, 2), "0.00%");
            assert_eq!(format_percent(1.0, 0), "100%");
            assert_eq!(format_percent(0.056789, 1), "5.7%");
        }

        #[test]
        fn test_format_percent_non_finite() {
            assert_eq!(format_percent(f64::NAN, 2), "0%");
            assert_eq!(format_percent(f64::INFINITY, 2), "0%");
            assert_eq!(format_percent(f64::NEG_INFINITY, 2), "0%");
        }
    }
}
