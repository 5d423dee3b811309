use crate::week::DUE_DATE_WEEK;
use chrono::NaiveDate;
use edd_curves::dataset::WeightCurve;
use edd_utils::dates::add_days;
use serde::{Deserialize, Serialize};

/// First week shown in the presentation window.
pub const DISPLAY_WEEK_MIN: i32 = 30;

/// Last week shown in the presentation window.
pub const DISPLAY_WEEK_MAX: i32 = 46;

/// One gestational week of the probability table.
///
/// `cumulative_weight` and `cumulative_share` run over the whole curve;
/// `normalized_probability` is renormalized over the weeks at or after the
/// current one and is zero for weeks already in the past.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRow {
    pub week: i32,
    pub weekly_weight: f64,
    pub cumulative_weight: f64,
    pub normalized_probability: f64,
    pub week_start_date: NaiveDate,
    pub cumulative_share: f64,
}

/// A weekly row restricted to the presentation window, with its share of
/// raw weight within that window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRow {
    pub week: i32,
    pub window_share: f64,
    pub normalized_probability: f64,
    pub cumulative_share: f64,
    pub week_start_date: NaiveDate,
}

/// First day of a gestational week: the due date shifted by whole weeks.
/// Week 40 starts on the due date itself.
pub fn week_start_date(due_date: &NaiveDate, week: i32) -> NaiveDate {
    add_days(due_date, (week - DUE_DATE_WEEK) as i64 * 7)
}

/// Build the weekly probability table for one cohort curve.
///
/// Weeks before `current_week` keep their raw and cumulative weights but
/// carry zero renormalized probability. When no weight remains at or after
/// the current week, every renormalized probability is zero.
pub fn build_weekly_table(
    weeks: &[i32],
    curve: &WeightCurve,
    due_date: &NaiveDate,
    current_week: i32,
) -> Vec<WeeklyRow> {
    let total_weight = curve.total();
    let tail_weight: f64 = weeks
        .iter()
        .zip(curve.0.iter())
        .filter(|(week, _)| **week >= current_week)
        .map(|(_, weight)| *weight)
        .sum();

    let mut cumulative = 0.0;
    weeks
        .iter()
        .zip(curve.0.iter())
        .map(|(&week, &weekly_weight)| {
            cumulative += weekly_weight;
            let normalized_probability = if week < current_week || tail_weight == 0.0 {
                0.0
            } else {
                weekly_weight / tail_weight
            };
            let cumulative_share = if total_weight == 0.0 {
                0.0
            } else {
                cumulative / total_weight
            };
            WeeklyRow {
                week,
                weekly_weight,
                cumulative_weight: cumulative,
                normalized_probability,
                week_start_date: week_start_date(due_date, week),
                cumulative_share,
            }
        })
        .collect()
}

/// Restrict a weekly table to the presentation window and compute each
/// row's share of the raw weight inside it.
pub fn display_window(rows: &[WeeklyRow]) -> Vec<WindowRow> {
    let window: Vec<&WeeklyRow> = rows
        .iter()
        .filter(|row| (DISPLAY_WEEK_MIN..=DISPLAY_WEEK_MAX).contains(&row.week))
        .collect();
    let window_total: f64 = window.iter().map(|row| row.weekly_weight).sum();

    window
        .into_iter()
        .map(|row| {
            let window_share = if window_total == 0.0 {
                0.0
            } else {
                row.weekly_weight / window_total
            };
            WindowRow {
                week: row.week,
                window_share,
                normalized_probability: row.normalized_probability,
                cumulative_share: row.cumulative_share,
                week_start_date: row.week_start_date,
            }
        })
        .collect()
}
