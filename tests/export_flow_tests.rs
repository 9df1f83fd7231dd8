// End to end test for export over the file backed store.
//
// Responsibilities
// - Record readings through the file store, reopen it, and export the reconciled roster as CSV.

use rstest::rstest;
use std::sync::Arc;
use tempfile::tempdir;
use water_billing::adapters::file::file_key_value_store::FileKeyValueStore;
use water_billing::application::command_handlers::import_roster_handler::ImportRosterHandler;
use water_billing::application::command_handlers::record_reading_handler::RecordReadingHandler;
use water_billing::application::query_handlers::export_handler::ExportHandler;
use water_billing::core::consumer::decider::record_reading::command::RecordReading;
use water_billing::core::consumer::key::ConsumerKey;
use water_billing::core::export::{EXPORT_COLUMNS, from_csv};

const ROSTER_CSV: &str = "WSIN,ConsumerName,Location,Type,ConsumerType,Year,Month,Status,PresentReading,PreviousReading,Consumption,WaterCharge,Surcharge,OverallTotal,PaymentStatus,OfficialReceipt,ProcessedBy\n\
\"1\",\"elai\",\"LOTAO\",\"residential\",\"old\",\"2025\",\"November\",\"normal\",\"\",\"4409\",\"\",\"\",\"\",\"\",\"\",\"\",\"s\"\n\
\"2\",\"Ana \"\"Nene\"\" Cruz\",\"CENTRAL\",\"commercial\",\"new\",\"2025\",\"November\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"OR-9\",\"s\"\n";

#[rstest]
#[tokio::test]
async fn export_reflects_readings_recorded_in_an_earlier_session() {
    let dir = tempdir().unwrap();

    {
        let store = Arc::new(FileKeyValueStore::open(dir.path()).await.unwrap());
        ImportRosterHandler::new(store.clone())
            .handle(from_csv(ROSTER_CSV).unwrap())
            .await
            .unwrap();
        RecordReadingHandler::new(store)
            .handle(RecordReading::new(
                ConsumerKey::new("1", "elai", "2025", "November"),
                "4415",
                "System Admin",
            ))
            .await
            .unwrap();
    }

    let reopened = Arc::new(FileKeyValueStore::open(dir.path()).await.unwrap());
    let snapshot = ExportHandler::new(reopened).handle().await.unwrap();

    let mut lines = snapshot.csv.lines();
    assert_eq!(lines.next(), Some(EXPORT_COLUMNS.join(",").as_str()));
    assert_eq!(
        lines.next(),
        Some(
            "\"1\",\"elai\",\"LOTAO\",\"residential\",\"old\",\"2025\",\"November\",\"normal\",\"4415\",\"4409\",\"6\",\"75.00\",\"0.00\",\"75.00\",\"Unpaid\",\"\",\"System Admin\""
        )
    );
    assert!(
        lines
            .next()
            .is_some_and(|line| line.starts_with("\"2\",\"Ana \"\"Nene\"\" Cruz\""))
    );
    assert_eq!(lines.next(), None);
    assert!(snapshot.csv.ends_with('\n'));

    assert_eq!(from_csv(&snapshot.csv).unwrap(), snapshot.records);
}

#[rstest]
#[tokio::test]
async fn export_of_an_empty_store_is_refused() {
    let dir = tempdir().unwrap();
    let store = Arc::new(FileKeyValueStore::open(dir.path()).await.unwrap());
    assert!(ExportHandler::new(store).handle().await.is_err());
}
