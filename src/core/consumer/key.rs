// Typed composite keys.
//
// Matching policy
// - Every component is trimmed of surrounding whitespace when the key is built.
// - Comparison is exact and case-sensitive. Only operator search is case-insensitive.

use std::fmt;

/// Full matching key of a roster row: one consumer in one billing period.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsumerKey {
    pub wsin: String,
    pub consumer_name: String,
    pub year: String,
    pub month: String,
}

impl ConsumerKey {
    pub fn new(
        wsin: impl AsRef<str>,
        consumer_name: impl AsRef<str>,
        year: impl AsRef<str>,
        month: impl AsRef<str>,
    ) -> Self {
        Self {
            wsin: wsin.as_ref().trim().to_string(),
            consumer_name: consumer_name.as_ref().trim().to_string(),
            year: year.as_ref().trim().to_string(),
            month: month.as_ref().trim().to_string(),
        }
    }

    pub fn identity(&self) -> ConsumerIdentity {
        ConsumerIdentity::new(&self.wsin, &self.consumer_name)
    }
}

impl fmt::Display for ConsumerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {}",
            self.consumer_name, self.wsin, self.month, self.year
        )
    }
}

/// A consumer across all billing periods. Used for payment history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsumerIdentity {
    pub wsin: String,
    pub consumer_name: String,
}

impl ConsumerIdentity {
    pub fn new(wsin: impl AsRef<str>, consumer_name: impl AsRef<str>) -> Self {
        Self {
            wsin: wsin.as_ref().trim().to_string(),
            consumer_name: consumer_name.as_ref().trim().to_string(),
        }
    }
}
