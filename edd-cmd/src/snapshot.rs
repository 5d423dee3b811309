//! Snapshot command: compute one probability snapshot and print it.

use anyhow::Context;
use chrono::NaiveDate;
use edd_curves::cohort::{AgeGroup, Parity};
use edd_curves::dataset::PopulationDataset;
use edd_model::daily::POSTPARTUM_LIMIT_DAYS;
use edd_model::digest::SnapshotDigest;
use edd_model::snapshot::{ModelInputs, Snapshot};
use edd_model::weekly::{display_window, DISPLAY_WEEK_MAX, DISPLAY_WEEK_MIN};
use edd_utils::dates::{format_date, parse_date, today_local};
use edd_utils::percent::format_percent;
use log::info;

/// Load a weights document from disk, or fall back to the bundled dataset.
pub(crate) fn load_dataset(weights: Option<&str>) -> anyhow::Result<PopulationDataset> {
    match weights {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read weights document {}", path))?;
            PopulationDataset::from_json_str(&text)
                .with_context(|| format!("failed to parse weights document {}", path))
        }
        None => Ok(PopulationDataset::bundled()),
    }
}

/// Parse the string arguments every subcommand shares into model inputs.
/// A missing analysis date means the local calendar day the command runs on.
pub(crate) fn parse_inputs(
    due: &str,
    age_group: &str,
    parity: &str,
    analysis_date: Option<&str>,
) -> anyhow::Result<ModelInputs> {
    let due_date = parse_date(due).with_context(|| format!("invalid due date: {}", due))?;
    let age_group: AgeGroup = age_group.parse()?;
    let parity: Parity = parity.parse()?;
    let analysis_date = match analysis_date {
        Some(s) => parse_date(s).with_context(|| format!("invalid analysis date: {}", s))?,
        None => today_local(),
    };
    Ok(ModelInputs {
        due_date,
        age_group,
        parity,
        analysis_date,
    })
}

fn render_cards(snapshot: &Snapshot, digest: &SnapshotDigest, analysis_date: &NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Current gestational week: {} (aligned to {})\n",
        digest.current_week,
        format_date(analysis_date)
    ));

    match &digest.today {
        Some(row) => {
            out.push_str(&format!(
                "Probability today: {} ({} of weekly volume",
                format_percent(row.normalized_probability, 2),
                format_percent(row.daily_weight, 2)
            ));
            if let Some(share) = digest.current_week_tail_share {
                out.push_str(&format!(", {} tail share", format_percent(share, 2)));
            }
            out.push_str(")\n");
        }
        None => out.push_str("Probability today: 0.00% (no data)\n"),
    }

    match &digest.peak {
        Some(row) => out.push_str(&format!(
            "Most likely upcoming day: {} ({})\n",
            format_date(&row.date),
            format_percent(row.normalized_probability, 2)
        )),
        None => out.push_str("Most likely upcoming day: none remaining\n"),
    }

    match &digest.next_nonzero {
        Some(row) => out.push_str(&format!(
            "Next non-zero day: {} ({})\n",
            format_date(&row.date),
            format_percent(row.normalized_probability, 2)
        )),
        None => out.push_str("Next non-zero day: complete, all probability consumed\n"),
    }

    if let Some((first, last)) = digest.window {
        out.push_str(&format!(
            "Modeled window: {} through {}, ending {} days after the due date\n",
            format_date(&first),
            format_date(&last),
            POSTPARTUM_LIMIT_DAYS
        ));
    }

    out.push_str(&format!(
        "Tail mass remaining: {}\n",
        format_percent(snapshot.tail_mass, 2)
    ));

    out
}

fn render_weekly_window(snapshot: &Snapshot) -> String {
    let rows = display_window(&snapshot.weekly);
    let mut out = String::new();

    out.push_str(&format!(
        "Weekly outlook (weeks {}-{})\n",
        DISPLAY_WEEK_MIN, DISPLAY_WEEK_MAX
    ));
    out.push_str("  week  window share  renormalized  cumulative  week starts\n");
    for row in &rows {
        let marker = if row.week == snapshot.current_week {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} {:>4}  {:>12}  {:>12}  {:>10}  {}\n",
            marker,
            row.week,
            format_percent(row.window_share, 2),
            format_percent(row.normalized_probability, 2),
            format_percent(row.cumulative_share, 2),
            format_date(&row.week_start_date)
        ));
    }

    out
}

pub fn run_snapshot(
    due: &str,
    age_group: &str,
    parity: &str,
    analysis_date: Option<&str>,
    weights: Option<&str>,
) -> anyhow::Result<()> {
    let dataset = load_dataset(weights)?;
    let inputs = parse_inputs(due, age_group, parity, analysis_date)?;

    info!(
        "Computing snapshot for {} / {}, due {}",
        inputs.age_group,
        inputs.parity,
        format_date(&inputs.due_date)
    );

    let snapshot = Snapshot::build(&dataset, &inputs)?;
    let digest = SnapshotDigest::compute(&snapshot, &inputs.analysis_date);

    print!("{}", render_cards(&snapshot, &digest, &inputs.analysis_date));
    println!();
    print!("{}", render_weekly_window(&snapshot));

    Ok(())
}
