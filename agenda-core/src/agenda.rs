//! Agenda root handle: configuration plus persisted meeting state.
//!
//! One CLI invocation loads the state snapshot, runs a single operation
//! through the service and saves on success. The snapshot holds the meeting
//! map and the user registry; the attendance index is derived and rebuilt on
//! every load.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AgendaConfig;
use crate::error::{AgendaError, AgendaResult};
use crate::registry::UserRegistry;
use crate::service::MeetingService;
use crate::store::MeetingStore;

const STATE_FILE: &str = "agenda.json";

/// On-disk snapshot of the engine state.
#[derive(Default, Serialize, Deserialize)]
struct State {
    store: MeetingStore,
    registry: UserRegistry,
}

pub struct Agenda {
    config: AgendaConfig,
    state: State,
}

impl Agenda {
    pub fn load() -> AgendaResult<Self> {
        let config = AgendaConfig::load()?;
        Self::with_config(config)
    }

    /// Open the agenda with an explicit config. A missing state file means an
    /// empty agenda, not an error.
    pub fn with_config(config: AgendaConfig) -> AgendaResult<Self> {
        let path = Self::state_path(&config);

        let mut state = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)
                .map_err(|e| AgendaError::Serialization(e.to_string()))?
        } else {
            State::default()
        };
        state.store.reindex();

        Ok(Agenda { config, state })
    }

    /// Borrow a service over the loaded state. The returned value carries the
    /// participant policy from config; all ownership stays in the agenda.
    pub fn service(&mut self) -> MeetingService<'_> {
        MeetingService::new(
            &mut self.state.store,
            &mut self.state.registry,
            self.config.participant_policy,
        )
    }

    pub fn store(&self) -> &MeetingStore {
        &self.state.store
    }

    /// Write the state snapshot atomically (tmp file + rename).
    pub fn save(&self) -> AgendaResult<()> {
        let dir = self.config.data_path();
        fs::create_dir_all(&dir)?;

        let path = dir.join(STATE_FILE);
        let tmp = dir.join(format!("{STATE_FILE}.tmp"));

        let content = serde_json::to_string_pretty(&self.state)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;

        fs::write(&tmp, content)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), "saved agenda state");
        Ok(())
    }

    fn state_path(config: &AgendaConfig) -> PathBuf {
        config.data_path().join(STATE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ParticipantPolicy;

    fn config_in(dir: &std::path::Path) -> AgendaConfig {
        AgendaConfig {
            data_dir: dir.to_path_buf(),
            default_user: None,
            participant_policy: ParticipantPolicy::Lenient,
        }
    }

    #[test]
    fn missing_state_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let agenda = Agenda::with_config(config_in(dir.path())).unwrap();
        assert!(agenda.store().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let mut agenda = Agenda::with_config(config_in(dir.path())).unwrap();
        agenda
            .service()
            .create_meeting(
                "alice",
                "Standup",
                &["bob".to_string()],
                "2020-01-01",
                "2020-01-02",
            )
            .unwrap();
        agenda.save().unwrap();

        let mut reloaded = Agenda::with_config(config_in(dir.path())).unwrap();
        let service = reloaded.service();
        let meetings = service
            .list_meetings("bob", "2020-01-01", "2020-01-01")
            .unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].title, "Standup");
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();

        let mut agenda = Agenda::with_config(config_in(dir.path())).unwrap();
        agenda
            .service()
            .create_meeting(
                "alice",
                "Standup",
                &["bob".to_string()],
                "2020-01-01",
                "2020-01-02",
            )
            .unwrap();
        agenda.save().unwrap();

        let mut again = Agenda::with_config(config_in(dir.path())).unwrap();
        again.service().delete_meeting("alice", "Standup").unwrap();
        again.save().unwrap();

        let final_state = Agenda::with_config(config_in(dir.path())).unwrap();
        assert!(final_state.store().is_empty());
    }
}
