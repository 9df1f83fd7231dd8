mod config;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing_subscriber::{EnvFilter, fmt};

use water_billing::adapters::file::file_key_value_store::FileKeyValueStore;
use water_billing::application::command_handlers::import_roster_handler::ImportRosterHandler;
use water_billing::application::command_handlers::record_reading_handler::RecordReadingHandler;
use water_billing::application::query_handlers::consumer_queries::ConsumerQueries;
use water_billing::application::query_handlers::export_handler::ExportHandler;
use water_billing::core::consumer::decider::record_reading::command::RecordReading;
use water_billing::core::consumer::key::{ConsumerIdentity, ConsumerKey};
use water_billing::core::consumer::record::ConsumerRecord;
use water_billing::core::consumer::search::LOCATIONS;
use water_billing::core::export::{export_file_name, from_csv};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "water_billing")]
#[command(about = "Water utility meter reading and billing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the roster with the rows of a JSON array or CSV file
    Import {
        /// Path to a .json or .csv roster file
        file: PathBuf,
    },

    /// Find consumers by name within a location
    Search {
        /// Part of the consumer name, any case
        #[arg(long)]
        name: String,

        /// One of the known locations
        #[arg(long)]
        location: String,
    },

    /// Record a present reading for one consumer and billing period
    Record {
        #[arg(long)]
        wsin: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        year: String,

        #[arg(long)]
        month: String,

        /// Present meter reading
        #[arg(long)]
        present: String,
    },

    /// Print the stored roster and payment status counts
    List,

    /// Print every recorded reading for a consumer
    History {
        #[arg(long)]
        wsin: String,

        #[arg(long)]
        name: String,
    },

    /// Write the reconciled roster as CSV
    Export {
        /// Output file; defaults to the dated file name in the export directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let store = Arc::new(
        FileKeyValueStore::open(&settings.data_dir)
            .await
            .with_context(|| format!("open data dir {}", settings.data_dir.display()))?,
    );

    match cli.cmd {
        Commands::Import { file } => {
            let rows = read_roster_file(&file).await?;
            let imported = ImportRosterHandler::new(store).handle(rows).await?;
            println!("imported {imported} consumers");
        }
        Commands::Search { name, location } => {
            if !LOCATIONS.iter().any(|known| *known == location.trim()) {
                bail!("unknown location '{location}', expected one of: {}", LOCATIONS.join(", "));
            }
            let queries = ConsumerQueries::new(store);
            for row in queries.search(&name, &location).await? {
                let identity = row.identity();
                let marker = if queries.has_history(&identity).await? { "*" } else { " " };
                println!(
                    "{marker} {} | {} | {} {} | previous {}",
                    row.wsin, row.consumer_name, row.month, row.year, row.previous_reading
                );
            }
        }
        Commands::Record {
            wsin,
            name,
            year,
            month,
            present,
        } => {
            let command = RecordReading::new(
                ConsumerKey::new(wsin, name, year, month),
                present,
                settings.operator.clone(),
            );
            let recorded = RecordReadingHandler::new(store).handle(command).await?;
            let payment = recorded.payment;
            println!(
                "{} {}: consumption {}, water charge {}, total {} ({})",
                payment.wsin,
                payment.consumer_name,
                payment.water_consumption,
                payment.water_charge,
                payment.overall_total,
                payment.payment_status
            );
        }
        Commands::List => {
            let queries = ConsumerQueries::new(store);
            for row in queries.list_consumers().await? {
                println!(
                    "{} | {} | {} | {} {} | {}",
                    row.wsin,
                    row.consumer_name,
                    row.location,
                    row.month,
                    row.year,
                    row.payment_status
                );
            }
            let counts = queries.payment_status_counts().await?;
            println!(
                "paid {}, unpaid {}, pending {}",
                counts.paid, counts.unpaid, counts.pending
            );
        }
        Commands::History { wsin, name } => {
            let identity = ConsumerIdentity::new(wsin, name);
            let history = ConsumerQueries::new(store).history(&identity).await?;
            if history.is_empty() {
                println!("no readings recorded");
            }
            for payment in history {
                println!(
                    "{} {} | {} -> {} | {} | {} | {}",
                    payment.month,
                    payment.year,
                    payment.previous_reading,
                    payment.present_reading,
                    payment.overall_total,
                    payment.payment_status,
                    payment.timestamp
                );
            }
        }
        Commands::Export { out } => {
            let snapshot = ExportHandler::new(store).handle().await?;
            let path = match out {
                Some(path) => path,
                None => {
                    fs::create_dir_all(&settings.export_dir).await?;
                    settings
                        .export_dir
                        .join(export_file_name(Utc::now()))
                }
            };
            fs::write(&path, snapshot.csv)
                .await
                .with_context(|| format!("write {}", path.display()))?;
            println!("exported {} rows to {}", snapshot.records.len(), path.display());
        }
    }
    Ok(())
}

async fn read_roster_file(path: &Path) -> Result<Vec<ConsumerRecord>> {
    let text = fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let rows: Vec<ConsumerRecord> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("parse {} as a JSON roster", path.display()))?,
        Some("csv") => from_csv(&text)
            .with_context(|| format!("parse {} as a CSV roster", path.display()))?,
        _ => bail!("unsupported roster file {}, expected .json or .csv", path.display()),
    };
    Ok(rows)
}
