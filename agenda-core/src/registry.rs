//! Known-user registry and participator resolution policy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AgendaError, AgendaResult};

/// How to treat participator names that have never been seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantPolicy {
    /// Unknown names are registered on first use.
    #[default]
    Lenient,
    /// Unknown names are rejected.
    Strict,
}

/// The set of usernames the agenda has seen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRegistry {
    users: BTreeSet<String>,
}

impl UserRegistry {
    /// Register a name unconditionally. Used for the acting user, whose
    /// identity was already resolved by the shell.
    pub fn register(&mut self, name: &str) {
        self.users.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.users.contains(name)
    }

    /// Resolve a participator name according to the policy.
    pub fn resolve(&mut self, name: &str, policy: ParticipantPolicy) -> AgendaResult<()> {
        if self.users.contains(name) {
            return Ok(());
        }
        match policy {
            ParticipantPolicy::Lenient => {
                debug!(name, "registering new user");
                self.users.insert(name.to_string());
                Ok(())
            }
            ParticipantPolicy::Strict => Err(AgendaError::UnknownUser(name.to_string())),
        }
    }
}
