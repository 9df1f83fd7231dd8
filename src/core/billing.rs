// This module groups the billing components.
//
// Structure
// - reading.rs: parsing and formatting of meter readings and amounts
// - tariff.rs: service classes, the charge schedule and the pure charge computation

pub mod reading;
pub mod tariff;
