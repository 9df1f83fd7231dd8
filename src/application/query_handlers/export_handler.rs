// Export query: the reconciled roster rendered as CSV.
//
// The stores are read, never written.

use crate::application::errors::ApplicationError;
use crate::application::repositories::{PaymentLog, RosterRepository};
use crate::core::consumer::reconcile::reconcile;
use crate::core::consumer::record::ConsumerRecord;
use crate::core::export::to_csv;
use crate::core::ports::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSnapshot {
    pub records: Vec<ConsumerRecord>,
    pub csv: String,
}

pub struct ExportHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    roster: RosterRepository<TStore>,
    payments: PaymentLog<TStore>,
}

impl<TStore> ExportHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            roster: RosterRepository::new(store.clone()),
            payments: PaymentLog::new(store),
        }
    }

    pub async fn handle(&self) -> Result<ExportSnapshot, ApplicationError> {
        let roster = self.roster.load().await?;
        let log = self.payments.load().await?;
        if roster.is_empty() && log.records.is_empty() {
            warn!("export rejected: nothing stored");
            return Err(ApplicationError::Validation(
                "there is no data to export".into(),
            ));
        }

        let records = reconcile(&roster, &log.records);
        let csv = to_csv(&records)?;
        info!(
            rows = records.len(),
            roster = roster.len(),
            payments = log.records.len(),
            "export rendered"
        );
        Ok(ExportSnapshot { records, csv })
    }
}

#[cfg(test)]
mod export_handler_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_key_value_store::InMemoryKeyValueStore;
    use crate::core::export::from_csv;
    use crate::test_support::fixtures::records::{ConsumerRecordBuilder, PaymentRecordBuilder};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_to_export_nothing() {
        let handler = ExportHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(matches!(
            handler.handle().await,
            Err(ApplicationError::Validation(message)) if message == "there is no data to export"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_export_the_reconciled_roster() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let rows = vec![ConsumerRecordBuilder::new().build()];
        RosterRepository::new(store.clone()).save(&rows).await.unwrap();
        PaymentLog::new(store.clone())
            .append(0, PaymentRecordBuilder::new().build())
            .await
            .unwrap();

        let snapshot = ExportHandler::new(store.clone()).handle().await.unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].present_reading, "4415");
        assert_eq!(snapshot.records[0].water_charge, "75.00");
        assert_eq!(from_csv(&snapshot.csv).unwrap(), snapshot.records);

        // Export is a read: the stored roster is untouched.
        assert_eq!(RosterRepository::new(store).load().await.unwrap(), rows);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_export_a_log_without_a_roster() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        PaymentLog::new(store.clone())
            .append(0, PaymentRecordBuilder::new().build())
            .await
            .unwrap();

        let snapshot = ExportHandler::new(store).handle().await.unwrap();
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].status, "normal");
    }
}
