use chrono::NaiveDate;
use edd_utils::dates::calendar_weeks_between;

/// Gestational week containing the due date.
pub const DUE_DATE_WEEK: i32 = 40;

/// Earliest gestational week the model tracks.
pub const WEEK_FLOOR: i32 = 20;

/// Latest gestational week the model tracks.
pub const WEEK_CEILING: i32 = 46;

/// Week reported when either anchor date is unavailable.
pub const FALLBACK_WEEK: i32 = 20;

/// Estimate the gestational week in progress on the analysis date.
///
/// Whole calendar weeks (Sunday-anchored) between the two dates are
/// subtracted from the due-date week, then clamped to the tracked range.
pub fn current_week(due_date: &NaiveDate, analysis_date: &NaiveDate) -> i32 {
    let diff_weeks = calendar_weeks_between(due_date, analysis_date);
    let week = DUE_DATE_WEEK as i64 - diff_weeks;
    week.clamp(WEEK_FLOOR as i64, WEEK_CEILING as i64) as i32
}

/// Degrading variant for inputs that may have failed to parse upstream.
/// Yields the fallback week instead of an error when a date is missing.
pub fn current_week_or_fallback(
    due_date: Option<NaiveDate>,
    analysis_date: Option<NaiveDate>,
) -> i32 {
    match (due_date, analysis_date) {
        (Some(due), Some(today)) => current_week(&due, &today),
        _ => FALLBACK_WEEK,
    }
}
