// Pure decision function for recording a reading.
//
// Purpose
// - Validate the command against the selected roster row and produce the roster update and the
//   payment log entry on success.
//
// Responsibilities
// - Refuse when no roster row was selected, when the service class is unknown, or when the
//   readings are blank, malformed or go backwards.
// - New readings are billed as Unpaid with no surcharge.
// - Never perform input or output.

use crate::core::billing::reading::{
    ReadingError, format_currency, format_quantity, parse_present_reading, parse_previous_reading,
};
use crate::core::billing::tariff::{ChargeError, ServiceClass, UnknownServiceClass, compute_charge};
use crate::core::consumer::decider::record_reading::command::RecordReading;
use crate::core::consumer::payment::{PaymentRecord, UNPAID};
use crate::core::consumer::record::ConsumerRecord;
use chrono::SecondsFormat;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("select a consumer before submitting a reading")]
    ConsumerNotSelected,

    #[error(transparent)]
    UnknownServiceClass(#[from] UnknownServiceClass),

    #[error(transparent)]
    MalformedReading(#[from] ReadingError),

    #[error(transparent)]
    InvalidReading(#[from] ChargeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingRecorded {
    pub updated: ConsumerRecord,
    pub payment: PaymentRecord,
}

pub fn decide_record_reading(
    consumer: Option<&ConsumerRecord>,
    command: RecordReading,
) -> Result<ReadingRecorded, DecideError> {
    let consumer = consumer.ok_or(DecideError::ConsumerNotSelected)?;
    let class: ServiceClass = consumer.service_type.parse()?;
    let previous = parse_previous_reading(&consumer.previous_reading)?;
    let present = parse_present_reading(&command.present_reading)?;
    let billed = compute_charge(class, previous, present)?;

    let surcharge = Decimal::ZERO;
    let consumption = format_quantity(billed.consumption);
    let water_charge = format_currency(billed.charge);
    let surcharge_text = format_currency(surcharge);
    let overall_total = billed
        .charge
        .checked_add(surcharge)
        .ok_or(ChargeError::OutOfRange {
            consumption: billed.consumption,
        })?;
    let overall_total = format_currency(overall_total);
    let present_reading = command.present_reading.trim().to_string();

    let updated = ConsumerRecord {
        present_reading: present_reading.clone(),
        consumption: consumption.clone(),
        water_charge: water_charge.clone(),
        surcharge: surcharge_text.clone(),
        overall_total: overall_total.clone(),
        payment_status: UNPAID.to_string(),
        processed_by: command.processed_by.clone(),
        ..consumer.clone()
    };

    let payment = PaymentRecord {
        id: command.payment_id,
        wsin: consumer.wsin.clone(),
        consumer_name: consumer.consumer_name.clone(),
        location: consumer.location.clone(),
        service_type: consumer.service_type.clone(),
        consumer_type: consumer.consumer_type.clone(),
        year: consumer.year.clone(),
        month: consumer.month.clone(),
        previous_reading: consumer.previous_reading.clone(),
        present_reading,
        water_consumption: consumption,
        water_charge,
        surcharge: surcharge_text,
        overall_total,
        payment_status: UNPAID.to_string(),
        processed_by: command.processed_by,
        timestamp: command
            .recorded_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    Ok(ReadingRecorded { updated, payment })
}

#[cfg(test)]
mod record_reading_decide_tests {
    use super::*;
    use crate::test_support::fixtures::commands::record_reading::RecordReadingBuilder;
    use crate::test_support::fixtures::records::ConsumerRecordBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn consumer() -> ConsumerRecord {
        ConsumerRecordBuilder::new().build()
    }

    #[rstest]
    fn it_should_bill_the_reading_as_unpaid(consumer: ConsumerRecord) {
        let command = RecordReadingBuilder::new().present_reading("4415").build();
        let decision = decide_record_reading(Some(&consumer), command.clone()).unwrap();

        let updated = decision.updated;
        assert_eq!(updated.present_reading, "4415");
        assert_eq!(updated.previous_reading, "4409");
        assert_eq!(updated.consumption, "6");
        assert_eq!(updated.water_charge, "75.00");
        assert_eq!(updated.surcharge, "0.00");
        assert_eq!(updated.overall_total, "75.00");
        assert_eq!(updated.payment_status, "Unpaid");
        assert_eq!(updated.processed_by, "System Admin");
        assert_eq!(updated.key(), consumer.key());
        assert_eq!(updated.location, consumer.location);

        let payment = decision.payment;
        assert_eq!(payment.id, command.payment_id);
        assert_eq!(payment.key(), consumer.key());
        assert_eq!(payment.previous_reading, "4409");
        assert_eq!(payment.water_consumption, "6");
        assert_eq!(payment.overall_total, "75.00");
        assert_eq!(payment.payment_status, "Unpaid");
        assert_eq!(payment.timestamp, "2025-11-03T08:30:00.000Z");
    }

    #[rstest]
    fn it_should_refuse_without_a_selected_consumer() {
        let command = RecordReadingBuilder::new().build();
        assert_eq!(
            decide_record_reading(None, command),
            Err(DecideError::ConsumerNotSelected)
        );
    }

    #[rstest]
    fn it_should_refuse_a_reading_below_the_previous_one(consumer: ConsumerRecord) {
        let command = RecordReadingBuilder::new().present_reading("4400").build();
        assert!(matches!(
            decide_record_reading(Some(&consumer), command),
            Err(DecideError::InvalidReading(ChargeError::InvalidReading { .. }))
        ));
    }

    #[rstest]
    #[case("")]
    #[case("n/a")]
    fn it_should_refuse_a_blank_or_malformed_reading(consumer: ConsumerRecord, #[case] raw: &str) {
        let command = RecordReadingBuilder::new().present_reading(raw).build();
        assert!(matches!(
            decide_record_reading(Some(&consumer), command),
            Err(DecideError::MalformedReading(_))
        ));
    }

    #[rstest]
    fn it_should_refuse_a_reading_too_large_to_bill() {
        let consumer = ConsumerRecordBuilder::new().previous_reading("0").build();
        let command = RecordReadingBuilder::new()
            .present_reading("79228162514264337593543950335")
            .build();
        assert!(matches!(
            decide_record_reading(Some(&consumer), command),
            Err(DecideError::InvalidReading(ChargeError::OutOfRange { .. }))
        ));
    }

    #[rstest]
    fn it_should_refuse_an_unknown_service_class() {
        let consumer = ConsumerRecordBuilder::new().service_type("industrial").build();
        let command = RecordReadingBuilder::new().build();
        assert!(matches!(
            decide_record_reading(Some(&consumer), command),
            Err(DecideError::UnknownServiceClass(_))
        ));
    }

    #[rstest]
    fn it_should_start_a_new_meter_at_zero() {
        let consumer = ConsumerRecordBuilder::new()
            .previous_reading("")
            .service_type("commercial")
            .build();
        let command = RecordReadingBuilder::new().present_reading("3").build();
        let decision = decide_record_reading(Some(&consumer), command).unwrap();
        assert_eq!(decision.updated.consumption, "3");
        assert_eq!(decision.updated.water_charge, "62.50");
        assert_eq!(decision.payment.previous_reading, "");
    }
}
