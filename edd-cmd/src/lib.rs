//! Command implementations for the EDD CLI.
//!
//! Provides subcommands for computing delivery-probability snapshots
//! and exporting the underlying tables as CSV.

use clap::Subcommand;

pub mod export;
pub mod snapshot;

#[derive(Subcommand)]
pub enum Command {
    /// Compute a probability snapshot and print it with a weekly outlook table
    Snapshot {
        /// Due date in YYYY-MM-DD format
        #[arg(short = 'd', long, default_value = "2025-12-22")]
        due: String,

        /// Maternal age group: <20, 20-29, 30-39 or 40+
        #[arg(short = 'a', long, default_value = "30-39")]
        age_group: String,

        /// Parity: primipara or multipara
        #[arg(short = 'p', long, default_value = "primipara")]
        parity: String,

        /// Analysis date in YYYY-MM-DD format (defaults to today)
        #[arg(long)]
        analysis_date: Option<String>,

        /// Path to a weights JSON document (defaults to the bundled dataset)
        #[arg(short = 'w', long)]
        weights: Option<String>,
    },

    /// Export the daily and weekly probability tables as CSV files
    Export {
        /// Due date in YYYY-MM-DD format
        #[arg(short = 'd', long, default_value = "2025-12-22")]
        due: String,

        /// Maternal age group: <20, 20-29, 30-39 or 40+
        #[arg(short = 'a', long, default_value = "30-39")]
        age_group: String,

        /// Parity: primipara or multipara
        #[arg(short = 'p', long, default_value = "primipara")]
        parity: String,

        /// Analysis date in YYYY-MM-DD format (defaults to today)
        #[arg(long)]
        analysis_date: Option<String>,

        /// Path to a weights JSON document (defaults to the bundled dataset)
        #[arg(short = 'w', long)]
        weights: Option<String>,

        /// Output path for the daily table CSV
        #[arg(long, default_value = "daily.csv")]
        daily_csv: String,

        /// Output path for the weekly table CSV
        #[arg(long, default_value = "weekly.csv")]
        weekly_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Snapshot {
            due,
            age_group,
            parity,
            analysis_date,
            weights,
        } => snapshot::run_snapshot(
            &due,
            &age_group,
            &parity,
            analysis_date.as_deref(),
            weights.as_deref(),
        ),
        Command::Export {
            due,
            age_group,
            parity,
            analysis_date,
            weights,
            daily_csv,
            weekly_csv,
        } => export::run_export(
            &due,
            &age_group,
            &parity,
            analysis_date.as_deref(),
            weights.as_deref(),
            &daily_csv,
            &weekly_csv,
        ),
    }
}
