// Read side over the roster and the payment log.
//
// Responsibilities
// - List and search the stored roster.
// - Answer history questions for a consumer across billing periods.
// - Count payment statuses over the reconciled view.
// - Expose the store change feed so a caller can refresh.

use crate::application::errors::ApplicationError;
use crate::application::repositories::{PaymentLog, RosterRepository};
use crate::core::consumer::key::ConsumerIdentity;
use crate::core::consumer::payment::{PAID, PENDING, PaymentRecord, UNPAID};
use crate::core::consumer::reconcile::{history_for_identity, reconcile};
use crate::core::consumer::record::ConsumerRecord;
use crate::core::consumer::search::search_consumers;
use crate::core::ports::{KeyValueStore, StoreChange};
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentStatusCounts {
    pub paid: usize,
    pub unpaid: usize,
    pub pending: usize,
}

pub struct ConsumerQueries<TStore>
where
    TStore: KeyValueStore + 'static,
{
    roster: RosterRepository<TStore>,
    payments: PaymentLog<TStore>,
}

impl<TStore> ConsumerQueries<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            roster: RosterRepository::new(store.clone()),
            payments: PaymentLog::new(store),
        }
    }

    pub async fn list_consumers(&self) -> Result<Vec<ConsumerRecord>, ApplicationError> {
        self.roster.load().await
    }

    pub async fn search(
        &self,
        name: &str,
        location: &str,
    ) -> Result<Vec<ConsumerRecord>, ApplicationError> {
        let roster = self.roster.load().await?;
        Ok(search_consumers(&roster, name, location)?)
    }

    pub async fn history(
        &self,
        identity: &ConsumerIdentity,
    ) -> Result<Vec<PaymentRecord>, ApplicationError> {
        let log = self.payments.load().await?;
        Ok(history_for_identity(identity, &log.records))
    }

    pub async fn has_history(&self, identity: &ConsumerIdentity) -> Result<bool, ApplicationError> {
        Ok(!self.history(identity).await?.is_empty())
    }

    pub async fn payment_status_counts(&self) -> Result<PaymentStatusCounts, ApplicationError> {
        let roster = self.roster.load().await?;
        let log = self.payments.load().await?;

        let mut counts = PaymentStatusCounts::default();
        for record in reconcile(&roster, &log.records) {
            match record.payment_status.trim() {
                PAID => counts.paid += 1,
                UNPAID => counts.unpaid += 1,
                "" | PENDING => counts.pending += 1,
                _ => {}
            }
        }
        Ok(counts)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.roster.subscribe()
    }
}
