//! The agenda operations, executed on behalf of an explicit acting user.
//!
//! Every method takes the acting username as its first argument; there is no
//! ambient "logged in" state. Validation and authorization run in full before
//! the first mutation, so a failed operation leaves the store untouched.

use tracing::info;

use crate::date_range::DateRange;
use crate::error::{AgendaError, AgendaResult};
use crate::meeting::Meeting;
use crate::registry::{ParticipantPolicy, UserRegistry};
use crate::store::MeetingStore;

pub struct MeetingService<'a> {
    store: &'a mut MeetingStore,
    registry: &'a mut UserRegistry,
    policy: ParticipantPolicy,
}

impl<'a> MeetingService<'a> {
    pub fn new(
        store: &'a mut MeetingStore,
        registry: &'a mut UserRegistry,
        policy: ParticipantPolicy,
    ) -> Self {
        MeetingService {
            store,
            registry,
            policy,
        }
    }

    /// Create a meeting sponsored by `user`. The title must be unused, the
    /// participator list non-empty and the dates a valid yyyy-mm-dd interval.
    pub fn create_meeting(
        &mut self,
        user: &str,
        title: &str,
        participators: &[String],
        start: &str,
        end: &str,
    ) -> AgendaResult<()> {
        require_field("title", title)?;
        if participators.is_empty() {
            return Err(AgendaError::EmptyField("participators".to_string()));
        }

        let range = DateRange::parse(start, end)?;
        if self.store.find_by_title(title).is_some() {
            return Err(AgendaError::TitleConflict(title.to_string()));
        }

        for name in participators {
            self.registry.resolve(name, self.policy)?;
        }
        self.registry.register(user);

        self.store.insert(Meeting::new(
            title,
            user,
            participators.iter().cloned(),
            range,
        ))?;
        info!(title, sponsor = user, "created meeting");
        Ok(())
    }

    /// Union new participators into a meeting `user` sponsors.
    pub fn add_participators(
        &mut self,
        user: &str,
        title: &str,
        names: &[String],
    ) -> AgendaResult<()> {
        require_field("title", title)?;
        if names.is_empty() {
            return Err(AgendaError::EmptyField("participators".to_string()));
        }

        let meeting = self
            .store
            .find_by_title(title)
            .ok_or_else(|| AgendaError::NotFound(title.to_string()))?;
        if !meeting.is_sponsor(user) {
            return Err(AgendaError::NotAuthorized);
        }

        for name in names {
            self.registry.resolve(name, self.policy)?;
        }

        self.store.update(title, |set| {
            set.extend(names.iter().cloned());
        })
    }

    /// Drop participators from a meeting `user` sponsors. Draining the set
    /// deletes the meeting; that is the intended outcome, not an error.
    pub fn remove_participators(
        &mut self,
        user: &str,
        title: &str,
        names: &[String],
    ) -> AgendaResult<()> {
        require_field("title", title)?;
        if names.is_empty() {
            return Err(AgendaError::EmptyField("participators".to_string()));
        }

        let meeting = self
            .store
            .find_by_title(title)
            .ok_or_else(|| AgendaError::NotFound(title.to_string()))?;
        if !meeting.is_sponsor(user) {
            return Err(AgendaError::NotAuthorized);
        }

        self.store.update(title, |set| {
            for name in names {
                set.remove(name);
            }
        })
    }

    /// All meetings `user` sponsors or attends that overlap the interval,
    /// ordered by start date then title.
    pub fn list_meetings(
        &self,
        user: &str,
        start: &str,
        end: &str,
    ) -> AgendaResult<Vec<&Meeting>> {
        let range = DateRange::parse(start, end)?;
        Ok(self.store.find_overlapping(user, &range))
    }

    /// Delete a meeting `user` sponsors, regardless of remaining participators.
    pub fn delete_meeting(&mut self, user: &str, title: &str) -> AgendaResult<()> {
        require_field("title", title)?;

        let meeting = self
            .store
            .find_by_title(title)
            .ok_or_else(|| AgendaError::NotFound(title.to_string()))?;
        if !meeting.is_sponsor(user) {
            return Err(AgendaError::NotAuthorized);
        }

        self.store.remove(title);
        info!(title, sponsor = user, "deleted meeting");
        Ok(())
    }

    /// Leave a meeting `user` attends. The sponsor must delete instead of
    /// quitting; the last participator leaving deletes the meeting.
    pub fn quit_meeting(&mut self, user: &str, title: &str) -> AgendaResult<()> {
        require_field("title", title)?;

        let meeting = self
            .store
            .find_by_title(title)
            .ok_or_else(|| AgendaError::NotFound(title.to_string()))?;
        if meeting.is_sponsor(user) {
            return Err(AgendaError::SponsorCannotQuit);
        }
        if !meeting.participators.contains(user) {
            return Err(AgendaError::NotParticipant);
        }

        self.store.update(title, |set| {
            set.remove(user);
        })
    }

    /// Delete every meeting sponsored by `user`. Returns how many were
    /// removed; zero is a successful no-op.
    pub fn clear_meetings(&mut self, user: &str) -> usize {
        let titles: Vec<String> = self
            .store
            .find_by_sponsor(user)
            .iter()
            .map(|m| m.title.clone())
            .collect();

        for title in &titles {
            self.store.remove(title);
        }
        if !titles.is_empty() {
            info!(sponsor = user, count = titles.len(), "cleared sponsored meetings");
        }
        titles.len()
    }
}

fn require_field(name: &str, value: &str) -> AgendaResult<()> {
    if value.trim().is_empty() {
        return Err(AgendaError::EmptyField(name.to_string()));
    }
    Ok(())
}
