// Operator search over the roster.
//
// Name matching is a case-insensitive substring match. Location must match exactly, since it is
// picked from a fixed list.

use crate::core::consumer::record::ConsumerRecord;

pub const LOCATIONS: [&str; 11] = [
    "LOTAO",
    "CENTRAL",
    "PALAWAN",
    "CADUCAN",
    "MORYO-MORYO",
    "HIGHWAY",
    "BUSAY",
    "DUWANGAN",
    "SAN ROQUE",
    "SAN ISIDRO",
    "CALIAN",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("enter both consumer name and location")]
    MissingCriteria,

    #[error("no consumers found named '{name}' in {location}")]
    NoMatch { name: String, location: String },
}

pub fn search_consumers(
    roster: &[ConsumerRecord],
    name: &str,
    location: &str,
) -> Result<Vec<ConsumerRecord>, SearchError> {
    let name = name.trim();
    let location = location.trim();
    if name.is_empty() || location.is_empty() {
        return Err(SearchError::MissingCriteria);
    }

    let needle = name.to_lowercase();
    let found: Vec<ConsumerRecord> = roster
        .iter()
        .filter(|r| r.consumer_name.to_lowercase().contains(&needle) && r.location.trim() == location)
        .cloned()
        .collect();

    if found.is_empty() {
        return Err(SearchError::NoMatch {
            name: name.to_string(),
            location: location.to_string(),
        });
    }
    Ok(found)
}
