//! Date interval parsing and overlap checks.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

/// Parse a date in the fixed yyyy-mm-dd format.
pub fn parse_date(s: &str) -> AgendaResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidFormat(s.to_string()))
}

/// An inclusive date interval. `start <= end` holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AgendaResult<Self> {
        if start > end {
            return Err(AgendaError::InvalidInterval);
        }
        Ok(DateRange { start, end })
    }

    /// Parse both endpoints (yyyy-mm-dd) and validate the interval.
    pub fn parse(start: &str, end: &str) -> AgendaResult<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Inclusive overlap: intervals sharing only an endpoint still overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ~ {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
