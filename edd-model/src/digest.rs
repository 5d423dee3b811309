use crate::daily::DailyRow;
use crate::snapshot::Snapshot;
use crate::weekly::display_window;
use chrono::NaiveDate;

/// Headline numbers summarizing a snapshot for presentation.
///
/// Every field is derived from the snapshot tables; absent values mean the
/// analysis date fell outside the modeled window or no probability remains.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotDigest {
    pub current_week: i32,
    /// The daily row matching the analysis date, when modeled.
    pub today: Option<DailyRow>,
    /// The current week's share of the renormalized weekly tail, when the
    /// week sits in the display window and its share is non-zero.
    pub current_week_tail_share: Option<f64>,
    /// First daily row holding the highest non-zero probability.
    pub peak: Option<DailyRow>,
    /// First daily row at or after the analysis date with non-zero
    /// probability. The analysis day itself qualifies even at zero.
    pub next_nonzero: Option<DailyRow>,
    /// First and last modeled dates.
    pub window: Option<(NaiveDate, NaiveDate)>,
}

impl SnapshotDigest {
    pub fn compute(snapshot: &Snapshot, analysis_date: &NaiveDate) -> SnapshotDigest {
        let today = snapshot
            .daily
            .iter()
            .find(|row| row.date == *analysis_date)
            .cloned();

        let mut peak: Option<&DailyRow> = None;
        for row in &snapshot.daily {
            if row.normalized_probability <= 0.0 {
                continue;
            }
            match peak {
                Some(best) if row.normalized_probability <= best.normalized_probability => {}
                _ => peak = Some(row),
            }
        }

        let next_nonzero = snapshot
            .daily
            .iter()
            .find(|row| {
                row.date >= *analysis_date
                    && (row.normalized_probability > 0.0 || row.date == *analysis_date)
            })
            .cloned();

        let window = match (snapshot.daily.first(), snapshot.daily.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        };

        let current_week_tail_share = display_window(&snapshot.weekly)
            .iter()
            .find(|row| row.week == snapshot.current_week)
            .and_then(|row| {
                if row.normalized_probability == 0.0 {
                    None
                } else {
                    Some(row.normalized_probability)
                }
            });

        SnapshotDigest {
            current_week: snapshot.current_week,
            today,
            current_week_tail_share,
            peak: peak.cloned(),
            next_nonzero,
            window,
        }
    }
}
