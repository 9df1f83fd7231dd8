// Import roster command handler.
//
// Responsibilities
// - Refuse an empty import and rows without a WSIN or a consumer name.
// - Replace the stored roster with the imported rows, in import order.

use crate::application::errors::ApplicationError;
use crate::application::repositories::RosterRepository;
use crate::core::consumer::record::ConsumerRecord;
use crate::core::ports::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ImportRosterHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    roster: RosterRepository<TStore>,
}

impl<TStore> ImportRosterHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            roster: RosterRepository::new(store),
        }
    }

    pub async fn handle(&self, records: Vec<ConsumerRecord>) -> Result<usize, ApplicationError> {
        if records.is_empty() {
            warn!("import rejected: no rows");
            return Err(ApplicationError::Validation("no data to import".into()));
        }
        if let Some(row) = records
            .iter()
            .position(|r| r.wsin.trim().is_empty() || r.consumer_name.trim().is_empty())
        {
            warn!(row = row + 1, "import rejected: missing identity");
            return Err(ApplicationError::Validation(format!(
                "row {}: WSIN and ConsumerName are required",
                row + 1
            )));
        }

        self.roster.save(&records).await?;
        info!(rows = records.len(), "roster imported");
        Ok(records.len())
    }
}

#[cfg(test)]
mod import_roster_handler_tests {
    use super::*;
    use crate::adapters::in_memory::in_memory_key_value_store::InMemoryKeyValueStore;
    use crate::test_support::fixtures::records::ConsumerRecordBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_replace_the_roster() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let handler = ImportRosterHandler::new(store.clone());
        handler
            .handle(vec![ConsumerRecordBuilder::new().wsin("9").build()])
            .await
            .unwrap();

        let rows = vec![
            ConsumerRecordBuilder::new().build(),
            ConsumerRecordBuilder::new().wsin("2").consumer_name("d").build(),
        ];
        assert_eq!(handler.handle(rows.clone()).await.unwrap(), 2);
        assert_eq!(RosterRepository::new(store).load().await.unwrap(), rows);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_an_empty_import() {
        let handler = ImportRosterHandler::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(matches!(
            handler.handle(Vec::new()).await,
            Err(ApplicationError::Validation(message)) if message == "no data to import"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_refuse_a_row_without_identity() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let handler = ImportRosterHandler::new(store.clone());
        let rows = vec![
            ConsumerRecordBuilder::new().build(),
            ConsumerRecordBuilder::new().consumer_name(" ").build(),
        ];
        assert!(matches!(
            handler.handle(rows).await,
            Err(ApplicationError::Validation(message)) if message.starts_with("row 2:")
        ));
        assert!(RosterRepository::new(store).load().await.unwrap().is_empty());
    }
}
