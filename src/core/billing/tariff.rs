// Pure charge computation.
//
// Purpose
// - Map (service class, previous reading, present reading) to (consumption, charge).
//
// Responsibilities
// - Refuse a present reading below the previous one. Never clamp.
// - Apply the two-tier schedule and round the charge for currency.
// - Never perform input or output.
//
// Notes
// - Residential and commercial connections currently share one schedule. Keep the lookup per
//   class so a differentiated schedule only touches `Tariff::for_class`.

use crate::core::billing::reading::round_currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceClass {
    Residential,
    Commercial,
}

impl ServiceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceClass::Residential => "residential",
            ServiceClass::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ServiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown service class '{0}'")]
pub struct UnknownServiceClass(pub String);

impl FromStr for ServiceClass {
    type Err = UnknownServiceClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(ServiceClass::Residential),
            "commercial" => Ok(ServiceClass::Commercial),
            _ => Err(UnknownServiceClass(s.to_string())),
        }
    }
}

/// Flat minimum charge up to `minimum_units`, then a rate for every unit above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub minimum_charge: Decimal,
    pub minimum_units: Decimal,
    pub rate_per_unit: Decimal,
}

impl Tariff {
    pub fn for_class(class: ServiceClass) -> Tariff {
        match class {
            ServiceClass::Residential | ServiceClass::Commercial => Tariff {
                minimum_charge: Decimal::new(6250, 2),
                minimum_units: Decimal::from(5),
                rate_per_unit: Decimal::new(1250, 2),
            },
        }
    }

    pub fn charge_for(&self, consumption: Decimal) -> Result<Decimal, ChargeError> {
        if consumption <= self.minimum_units {
            return Ok(round_currency(self.minimum_charge));
        }
        consumption
            .checked_sub(self.minimum_units)
            .and_then(|excess| excess.checked_mul(self.rate_per_unit))
            .and_then(|variable| variable.checked_add(self.minimum_charge))
            .map(round_currency)
            .ok_or(ChargeError::OutOfRange { consumption })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    pub consumption: Decimal,
    pub charge: Decimal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChargeError {
    #[error("present reading {present} cannot be less than previous reading {previous}")]
    InvalidReading { previous: Decimal, present: Decimal },

    #[error("consumption {consumption} is too large to bill")]
    OutOfRange { consumption: Decimal },
}

pub fn compute_charge(
    class: ServiceClass,
    previous: Decimal,
    present: Decimal,
) -> Result<Charge, ChargeError> {
    if present < previous {
        return Err(ChargeError::InvalidReading { previous, present });
    }
    let consumption = present
        .checked_sub(previous)
        .ok_or(ChargeError::OutOfRange { consumption: present })?;
    Ok(Charge {
        consumption,
        charge: Tariff::for_class(class).charge_for(consumption)?,
    })
}
