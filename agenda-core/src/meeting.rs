//! Meeting entity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;

/// A scheduled meeting. The title is the primary key and is globally unique
/// among live meetings; title, sponsor and date range never change after
/// creation. Only the participator set is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub title: String,
    pub sponsor: String,
    pub participators: BTreeSet<String>,
    pub range: DateRange,
}

impl Meeting {
    pub fn new(
        title: impl Into<String>,
        sponsor: impl Into<String>,
        participators: impl IntoIterator<Item = impl Into<String>>,
        range: DateRange,
    ) -> Self {
        Meeting {
            title: title.into(),
            sponsor: sponsor.into(),
            participators: participators.into_iter().map(Into::into).collect(),
            range,
        }
    }

    /// The sponsor counts as an attendee whether or not they appear in the
    /// participator set.
    pub fn involves(&self, user: &str) -> bool {
        self.sponsor == user || self.participators.contains(user)
    }

    pub fn is_sponsor(&self, user: &str) -> bool {
        self.sponsor == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sponsor_is_implicit_attendee() {
        let range = DateRange::parse("2020-01-01", "2020-01-02").unwrap();
        let meeting = Meeting::new("Standup", "alice", ["bob"], range);

        assert!(meeting.involves("alice"));
        assert!(meeting.involves("bob"));
        assert!(!meeting.involves("carol"));
        assert!(meeting.is_sponsor("alice"));
        assert!(!meeting.is_sponsor("bob"));
    }
}
