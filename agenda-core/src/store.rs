//! Title-keyed meeting storage with a per-user attendance index.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date_range::DateRange;
use crate::error::{AgendaError, AgendaResult};
use crate::meeting::Meeting;

/// Owns every live meeting. The attendance index maps a username to the
/// titles of meetings that user sponsors or attends; it is derived state,
/// rebuilt from the meeting map on load and kept in sync by every mutation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MeetingStore {
    meetings: BTreeMap<String, Meeting>,
    #[serde(skip)]
    attendance: BTreeMap<String, BTreeSet<String>>,
}

impl MeetingStore {
    /// Insert a new meeting, rejecting duplicate titles.
    pub fn insert(&mut self, meeting: Meeting) -> AgendaResult<()> {
        if self.meetings.contains_key(&meeting.title) {
            return Err(AgendaError::TitleConflict(meeting.title));
        }

        self.index(&meeting.sponsor, &meeting.title);
        for name in &meeting.participators {
            self.index(name, &meeting.title);
        }

        debug!(title = %meeting.title, "inserted meeting");
        self.meetings.insert(meeting.title.clone(), meeting);
        Ok(())
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Meeting> {
        self.meetings.get(title)
    }

    pub fn find_by_sponsor(&self, user: &str) -> Vec<&Meeting> {
        self.titles_for(user)
            .filter_map(|title| self.meetings.get(title))
            .filter(|m| m.is_sponsor(user))
            .collect()
    }

    pub fn find_by_participant(&self, user: &str) -> Vec<&Meeting> {
        self.titles_for(user)
            .filter_map(|title| self.meetings.get(title))
            .collect()
    }

    /// Meetings the user sponsors or attends whose interval overlaps `range`,
    /// ordered by start date then title so output is deterministic.
    pub fn find_overlapping(&self, user: &str, range: &DateRange) -> Vec<&Meeting> {
        let mut hits: Vec<&Meeting> = self
            .titles_for(user)
            .filter_map(|title| self.meetings.get(title))
            .filter(|m| m.range.overlaps(range))
            .collect();

        hits.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then_with(|| a.title.cmp(&b.title))
        });
        hits
    }

    /// Remove a meeting and unindex all of its attendees.
    pub fn remove(&mut self, title: &str) -> Option<Meeting> {
        let meeting = self.meetings.remove(title)?;

        self.unindex(&meeting.sponsor, title);
        for name in &meeting.participators {
            self.unindex(name, title);
        }

        debug!(title, "removed meeting");
        Some(meeting)
    }

    /// Apply a participator-set mutation. The index is adjusted for every
    /// name added or dropped, and a meeting whose participator set drains to
    /// empty is removed outright rather than left as a degenerate record.
    pub fn update<F>(&mut self, title: &str, mutate: F) -> AgendaResult<()>
    where
        F: FnOnce(&mut BTreeSet<String>),
    {
        let meeting = self
            .meetings
            .get_mut(title)
            .ok_or_else(|| AgendaError::NotFound(title.to_string()))?;

        let before = meeting.participators.clone();
        mutate(&mut meeting.participators);
        let after = meeting.participators.clone();
        let sponsor = meeting.sponsor.clone();

        for name in before.difference(&after) {
            // The sponsor stays indexed even when dropped from the set.
            if *name != sponsor {
                self.unindex(name, title);
            }
        }
        for name in after.difference(&before) {
            self.index(name, title);
        }

        if after.is_empty() {
            debug!(title, "participator set drained, removing meeting");
            self.remove(title);
        }
        Ok(())
    }

    /// Rebuild the attendance index from the meeting map. Called after
    /// deserialization, since the index is not persisted.
    pub fn reindex(&mut self) {
        let mut attendance: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (title, meeting) in &self.meetings {
            attendance
                .entry(meeting.sponsor.clone())
                .or_default()
                .insert(title.clone());
            for name in &meeting.participators {
                attendance.entry(name.clone()).or_default().insert(title.clone());
            }
        }
        self.attendance = attendance;
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    fn titles_for(&self, user: &str) -> impl Iterator<Item = &String> {
        self.attendance.get(user).into_iter().flatten()
    }

    fn index(&mut self, user: &str, title: &str) {
        self.attendance
            .entry(user.to_string())
            .or_default()
            .insert(title.to_string());
    }

    fn unindex(&mut self, user: &str, title: &str) {
        if let Some(titles) = self.attendance.get_mut(user) {
            titles.remove(title);
            if titles.is_empty() {
                self.attendance.remove(user);
            }
        }
    }
}
