//! Export command: write the probability tables as CSV files.

use crate::snapshot::{load_dataset, parse_inputs};
use edd_model::daily::DailyRow;
use edd_model::snapshot::Snapshot;
use edd_model::weekly::WeeklyRow;
use edd_utils::dates::format_date;
use log::info;

fn daily_csv_text(rows: &[DailyRow]) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

fn weekly_csv_text(rows: &[WeeklyRow]) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

pub fn run_export(
    due: &str,
    age_group: &str,
    parity: &str,
    analysis_date: Option<&str>,
    weights: Option<&str>,
    daily_csv: &str,
    weekly_csv: &str,
) -> anyhow::Result<()> {
    let dataset = load_dataset(weights)?;
    let inputs = parse_inputs(due, age_group, parity, analysis_date)?;
    let snapshot = Snapshot::build(&dataset, &inputs)?;

    info!(
        "Exporting tables for {} / {}, due {}, analysis {}",
        inputs.age_group,
        inputs.parity,
        format_date(&inputs.due_date),
        format_date(&inputs.analysis_date)
    );

    std::fs::write(daily_csv, daily_csv_text(&snapshot.daily)?)?;
    info!("Wrote {} daily rows to {}", snapshot.daily.len(), daily_csv);

    std::fs::write(weekly_csv, weekly_csv_text(&snapshot.weekly)?)?;
    info!(
        "Wrote {} weekly rows to {}",
        snapshot.weekly.len(),
        weekly_csv
    );

    Ok(())
}
