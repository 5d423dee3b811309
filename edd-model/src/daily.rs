use crate::weekly::week_start_date;
use chrono::NaiveDate;
use edd_curves::dataset::WeightCurve;
use edd_utils::dates::add_days;
use serde::{Deserialize, Serialize};

/// Days past the due date the model keeps generating rows for.
pub const POSTPARTUM_LIMIT_DAYS: i64 = 33;

/// One calendar day of the probability table.
///
/// Dates increase by exactly one day across consecutive rows. Rows before
/// the analysis date keep their raw weights but carry zero renormalized
/// values, as does every row when no weight remains in the tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub week: i32,
    pub daily_weight: f64,
    pub cumulative_weight: f64,
    pub normalized_probability: f64,
    pub cumulative_normalized: f64,
}

/// A daily table along with the raw weight remaining at or after the
/// analysis date.
#[derive(Debug, Clone)]
pub struct DailyTable {
    pub rows: Vec<DailyRow>,
    pub tail_mass: f64,
}

/// Expand weekly weights into a renormalized per-day table.
///
/// Every week contributes seven equal-weight days starting at its week
/// start date; days after `due_date + POSTPARTUM_LIMIT_DAYS` are not
/// emitted. Renormalization divides by the tail mass, the summed weight of
/// days at or after the analysis date. The running `cumulative_normalized`
/// replays the same additions as the tail mass, so the final in-tail row
/// ends at exactly 1.0.
pub fn build_daily_table(
    weeks: &[i32],
    curve: &WeightCurve,
    due_date: &NaiveDate,
    analysis_date: &NaiveDate,
) -> DailyTable {
    let cutoff_date = add_days(due_date, POSTPARTUM_LIMIT_DAYS);
    let mut rows: Vec<DailyRow> = Vec::new();
    let mut cumulative = 0.0;

    for (&week, &weekly_weight) in weeks.iter().zip(curve.0.iter()) {
        let daily_weight = weekly_weight / 7.0;
        let week_start = week_start_date(due_date, week);
        for day_offset in 0..7 {
            let date = add_days(&week_start, day_offset);
            if date > cutoff_date {
                continue;
            }
            cumulative += daily_weight;
            rows.push(DailyRow {
                date,
                week,
                daily_weight,
                cumulative_weight: cumulative,
                normalized_probability: 0.0,
                cumulative_normalized: 0.0,
            });
        }
    }

    let tail_mass: f64 = rows
        .iter()
        .filter(|row| row.date >= *analysis_date)
        .map(|row| row.daily_weight)
        .sum();

    let mut running_tail = 0.0;
    for row in &mut rows {
        if row.date < *analysis_date || tail_mass == 0.0 {
            continue;
        }
        row.normalized_probability = row.daily_weight / tail_mass;
        running_tail += row.daily_weight;
        row.cumulative_normalized = running_tail / tail_mass;
    }

    DailyTable { rows, tail_mass }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use edd_curves::dataset::WeightCurve;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap()
    }

    #[test]
    fn test_single_week_expands_to_seven_days() {
        let table = build_daily_table(&[40], &WeightCurve(vec![1.0]), &due(), &due());

        assert_eq!(table.rows.len(), 7);
        assert_eq!(table.rows[0].date, due());
        assert_eq!(
            table.rows[6].date,
            NaiveDate::from_ymd_opt(2025, 12, 28).unwrap()
        );
        for row in &table.rows {
            assert_eq!(row.week, 40);
            assert_eq!(row.daily_weight, 1.0 / 7.0);
        }

        let probability_sum: f64 = table.rows.iter().map(|r| r.normalized_probability).sum();
        assert!((probability_sum - 1.0).abs() < 1e-9);
        assert_eq!(table.rows.last().unwrap().cumulative_normalized, 1.0);
    }

    #[test]
    fn test_dates_are_consecutive() {
        let weeks = [38, 39, 40, 41];
        let curve = WeightCurve(vec![0.1, 0.3, 0.4, 0.2]);
        let analysis = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let table = build_daily_table(&weeks, &curve, &due(), &analysis);

        assert_eq!(table.rows.len(), 28);
        for pair in table.rows.windows(2) {
            assert_eq!(pair[1].date, add_days(&pair[0].date, 1));
        }
    }

    #[test]
    fn test_postpartum_cutoff() {
        // week 44 starts at due + 28 and straddles the cutoff at due + 33;
        // week 45 starts past it entirely
        let weeks = [43, 44, 45];
        let curve = WeightCurve(vec![0.7, 0.2, 0.1]);
        let analysis = due();
        let table = build_daily_table(&weeks, &curve, &due(), &analysis);

        assert_eq!(table.rows.len(), 13);
        assert_eq!(
            table.rows.last().unwrap().date,
            add_days(&due(), POSTPARTUM_LIMIT_DAYS)
        );
        let week_45_rows = table.rows.iter().filter(|row| row.week == 45).count();
        assert_eq!(week_45_rows, 0);
    }

    #[test]
    fn test_past_rows_are_zeroed() {
        // week 36 starts on 2025-11-24; everything in week 35 is in the past
        let weeks = [35, 36, 37];
        let curve = WeightCurve(vec![0.2, 0.3, 0.5]);
        let analysis = NaiveDate::from_ymd_opt(2025, 11, 24).unwrap();
        let table = build_daily_table(&weeks, &curve, &due(), &analysis);

        let expected_tail = 0.3 + 0.5;
        assert!((table.tail_mass - expected_tail).abs() < 1e-12);

        for row in &table.rows {
            if row.date < analysis {
                assert_eq!(row.normalized_probability, 0.0);
                assert_eq!(row.cumulative_normalized, 0.0);
                // raw columns still accumulate through the past
                assert!(row.cumulative_weight > 0.0);
            } else {
                assert!(row.normalized_probability > 0.0);
            }
        }

        let first_nonzero = table
            .rows
            .iter()
            .find(|row| row.normalized_probability > 0.0)
            .unwrap();
        assert_eq!(first_nonzero.date, analysis);
        assert_eq!(table.rows.last().unwrap().cumulative_normalized, 1.0);
    }

    #[test]
    fn test_analysis_past_cutoff_zeroes_everything() {
        let weeks = [39, 40, 41];
        let curve = WeightCurve(vec![0.3, 0.5, 0.2]);
        let analysis = add_days(&due(), POSTPARTUM_LIMIT_DAYS + 1);
        let table = build_daily_table(&weeks, &curve, &due(), &analysis);

        assert_eq!(table.tail_mass, 0.0);
        assert!(!table.rows.is_empty());
        for row in &table.rows {
            assert_eq!(row.normalized_probability, 0.0);
            assert_eq!(row.cumulative_normalized, 0.0);
        }
    }

    #[test]
    fn test_cumulative_normalized_is_monotone() {
        let weeks = [37, 38, 39, 40, 41];
        let curve = WeightCurve(vec![0.05, 0.15, 0.3, 0.35, 0.15]);
        let analysis = NaiveDate::from_ymd_opt(2025, 12, 5).unwrap();
        let table = build_daily_table(&weeks, &curve, &due(), &analysis);

        let mut previous = 0.0;
        for row in &table.rows {
            assert!(row.cumulative_normalized >= previous || row.cumulative_normalized == 0.0);
            if row.cumulative_normalized > 0.0 {
                previous = row.cumulative_normalized;
            }
        }
        assert_eq!(table.rows.last().unwrap().cumulative_normalized, 1.0);
    }
}
