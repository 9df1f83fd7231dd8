// Record reading command handler orchestrates the write flow.
//
// Responsibilities
// - Load the roster and the payment log.
// - Find the roster row by composite key and call the decider.
// - Append the payment with the log version seen at load, then write the roster back.

use crate::application::errors::ApplicationError;
use crate::application::repositories::{PaymentLog, RosterRepository};
use crate::core::consumer::decider::record_reading::command::RecordReading;
use crate::core::consumer::decider::record_reading::decide::{
    ReadingRecorded, decide_record_reading,
};
use crate::core::ports::KeyValueStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RecordReadingHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    roster: RosterRepository<TStore>,
    payments: PaymentLog<TStore>,
}

impl<TStore> RecordReadingHandler<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            roster: RosterRepository::new(store.clone()),
            payments: PaymentLog::new(store),
        }
    }

    pub async fn handle(&self, command: RecordReading) -> Result<ReadingRecorded, ApplicationError> {
        let mut roster = self.roster.load().await?;
        let log = self.payments.load().await?;

        let key = command.key.clone();
        let Some(position) = roster.iter().position(|row| row.key() == key) else {
            warn!(consumer = %key, "reading rejected: consumer not on the roster");
            return Err(ApplicationError::NotFound(format!("consumer {key}")));
        };

        let decision = decide_record_reading(Some(&roster[position]), command).inspect_err(|e| {
            warn!(consumer = %key, error = %e, "reading rejected");
        })?;

        // Export re-applies the log, so it is written first.
        self.payments
            .append(log.version, decision.payment.clone())
            .await?;
        roster[position] = decision.updated.clone();
        self.roster.save(&roster).await?;

        info!(
            consumer = %key,
            payment_id = %decision.payment.id,
            consumption = %decision.payment.water_consumption,
            charge = %decision.payment.water_charge,
            "reading recorded"
        );
        Ok(decision)
    }
}
