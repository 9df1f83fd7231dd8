// CSV rendering of roster rows.
//
// Format
// - A header line with the 17 column names, unquoted.
// - One line per row. Every field is quoted, inner quotes are doubled, empty fields are "".
// - Every line ends with '\n'.
//
// The same format is read back by `from_csv`, which also serves roster import.

use crate::core::consumer::record::ConsumerRecord;
use chrono::{DateTime, Utc};
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use thiserror::Error;

pub const EXPORT_COLUMNS: [&str; 17] = [
    "WSIN",
    "ConsumerName",
    "Location",
    "Type",
    "ConsumerType",
    "Year",
    "Month",
    "Status",
    "PresentReading",
    "PreviousReading",
    "Consumption",
    "WaterCharge",
    "Surcharge",
    "OverallTotal",
    "PaymentStatus",
    "OfficialReceipt",
    "ProcessedBy",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("failed to flush csv output")]
    Flush(#[source] std::io::Error),

    #[error(transparent)]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub fn to_csv(records: &[ConsumerRecord]) -> Result<String, ExportError> {
    let mut out = EXPORT_COLUMNS.join(",");
    out.push('\n');

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record.export_fields())?;
    }
    let rows = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.into_error()))?;

    out.push_str(&String::from_utf8(rows)?);
    Ok(out)
}

pub fn from_csv(text: &str) -> Result<Vec<ConsumerRecord>, ExportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize::<ConsumerRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Dated export file name. The date is the UTC calendar day of `at`.
pub fn export_file_name(at: DateTime<Utc>) -> String {
    format!("water_billing_data_{}.csv", at.date_naive().format("%Y-%m-%d"))
}
