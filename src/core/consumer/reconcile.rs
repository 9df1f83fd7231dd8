// Fold the payment log onto a roster snapshot.
//
// Purpose
// - Produce the export view: the roster as it stands once every recorded reading is applied.
// - Answer history questions about a consumer.
//
// Responsibilities
// - Apply log entries in log order. Later entries for the same key win.
// - Synthesize a roster row for log entries whose key is not on the roster.
// - Never mutate the inputs and never touch a store. The caller owns the write step.

use crate::core::consumer::key::{ConsumerIdentity, ConsumerKey};
use crate::core::consumer::payment::PaymentRecord;
use crate::core::consumer::record::{ConsumerRecord, DEFAULT_METER_STATUS};
use std::collections::HashMap;

pub fn reconcile(roster: &[ConsumerRecord], log: &[PaymentRecord]) -> Vec<ConsumerRecord> {
    let mut merged = roster.to_vec();

    // First roster row wins when an import carries duplicate keys.
    let mut index: HashMap<ConsumerKey, usize> = HashMap::with_capacity(merged.len());
    for (position, record) in merged.iter().enumerate() {
        index.entry(record.key()).or_insert(position);
    }

    for payment in log {
        match index.get(&payment.key()) {
            Some(&position) => apply_payment(&mut merged[position], payment),
            None => {
                index.insert(payment.key(), merged.len());
                merged.push(synthesize(payment));
            }
        }
    }
    merged
}

fn apply_payment(record: &mut ConsumerRecord, payment: &PaymentRecord) {
    record.present_reading = payment.present_reading.clone();
    record.previous_reading = payment.previous_reading.clone();
    record.consumption = payment.water_consumption.clone();
    record.water_charge = payment.water_charge.clone();
    record.surcharge = payment.surcharge.clone();
    record.overall_total = payment.overall_total.clone();
    record.payment_status = payment.payment_status.clone();
    record.processed_by = payment.processed_by.clone();
    if record.status.trim().is_empty() {
        record.status = DEFAULT_METER_STATUS.to_string();
    }
}

fn synthesize(payment: &PaymentRecord) -> ConsumerRecord {
    ConsumerRecord {
        wsin: payment.wsin.clone(),
        consumer_name: payment.consumer_name.clone(),
        location: payment.location.clone(),
        service_type: payment.service_type.clone(),
        consumer_type: payment.consumer_type.clone(),
        year: payment.year.clone(),
        month: payment.month.clone(),
        status: DEFAULT_METER_STATUS.to_string(),
        present_reading: payment.present_reading.clone(),
        previous_reading: payment.previous_reading.clone(),
        consumption: payment.water_consumption.clone(),
        water_charge: payment.water_charge.clone(),
        surcharge: payment.surcharge.clone(),
        overall_total: payment.overall_total.clone(),
        payment_status: payment.payment_status.clone(),
        official_receipt: String::new(),
        processed_by: payment.processed_by.clone(),
    }
}

/// Every log entry for the consumer, across all billing periods, in log order.
pub fn history_for(consumer: &ConsumerRecord, log: &[PaymentRecord]) -> Vec<PaymentRecord> {
    history_for_identity(&consumer.identity(), log)
}

pub fn history_for_identity(
    identity: &ConsumerIdentity,
    log: &[PaymentRecord],
) -> Vec<PaymentRecord> {
    log.iter()
        .filter(|payment| payment.identity() == *identity)
        .cloned()
        .collect()
}

pub fn has_history(consumer: &ConsumerRecord, log: &[PaymentRecord]) -> bool {
    let identity = consumer.identity();
    log.iter().any(|payment| payment.identity() == identity)
}
