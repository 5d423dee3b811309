use crate::daily::{build_daily_table, DailyRow};
use crate::week::current_week;
use crate::weekly::{build_weekly_table, WeeklyRow};
use chrono::NaiveDate;
use edd_curves::cohort::{AgeGroup, Parity};
use edd_curves::dataset::{CohortError, PopulationDataset};
use log::debug;
use std::collections::BTreeMap;

/// Everything the model needs to position the tables in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInputs {
    pub due_date: NaiveDate,
    pub age_group: AgeGroup,
    pub parity: Parity,
    pub analysis_date: NaiveDate,
}

/// An immutable view of both probability tables for one set of inputs.
/// Rebuilt wholesale whenever an input changes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub weekly: Vec<WeeklyRow>,
    pub daily: Vec<DailyRow>,
    pub current_week: i32,
    pub tail_mass: f64,
    probabilities: BTreeMap<NaiveDate, f64>,
}

impl Snapshot {
    /// Build the full snapshot for one cohort and pair of anchor dates.
    ///
    /// The current week is computed once and shared by both tables. The
    /// only failure mode is a cohort missing from the dataset.
    pub fn build(dataset: &PopulationDataset, inputs: &ModelInputs) -> Result<Snapshot, CohortError> {
        let curve = dataset.curve(inputs.age_group, inputs.parity)?;
        let week_now = current_week(&inputs.due_date, &inputs.analysis_date);

        let weekly = build_weekly_table(&dataset.weeks, &curve, &inputs.due_date, week_now);
        let daily_table =
            build_daily_table(&dataset.weeks, &curve, &inputs.due_date, &inputs.analysis_date);

        let probabilities: BTreeMap<NaiveDate, f64> = daily_table
            .rows
            .iter()
            .map(|row| (row.date, row.normalized_probability))
            .collect();

        debug!(
            "snapshot for {} / {}: week {}, {} weekly rows, {} daily rows, tail mass {:.6}",
            inputs.age_group,
            inputs.parity,
            week_now,
            weekly.len(),
            daily_table.rows.len(),
            daily_table.tail_mass
        );

        Ok(Snapshot {
            weekly,
            daily: daily_table.rows,
            current_week: week_now,
            tail_mass: daily_table.tail_mass,
            probabilities,
        })
    }

    /// Renormalized probability for a calendar day.
    /// Dates outside the modeled window yield zero.
    pub fn probability_for(&self, date: &NaiveDate) -> f64 {
        self.probabilities.get(date).copied().unwrap_or(0.0)
    }
}
