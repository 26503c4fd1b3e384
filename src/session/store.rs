//! Session store: the record format plus the failure policy.
//!
//! Storage trouble is an environment condition. `save` logs and returns,
//! `load` reports anything unreadable as absent. Neither panics and
//! neither surfaces an error to gameplay.

use crate::core::{StoreError, DEFAULT_STORAGE_KEY};

use super::record::PersistedSession;
use super::slot::SessionSlot;

/// A slot bound to the key the session lives under.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    slot: S,
    key: String,
}

impl<S: SessionSlot> SessionStore<S> {
    /// Store `slot` under `key`.
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Store `slot` under `"rpsGameState"`.
    pub fn with_default_key(slot: S) -> Self {
        Self::new(slot, DEFAULT_STORAGE_KEY)
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Overwrite the slot with `session`, reporting failures.
    pub fn try_save(&mut self, session: &PersistedSession) -> Result<(), StoreError> {
        let raw = session.to_json()?;
        self.slot.write(&self.key, &raw)
    }

    /// Overwrite the slot with `session`. Failures are logged, not returned.
    pub fn save(&mut self, session: &PersistedSession) {
        match self.try_save(session) {
            Ok(()) => log::debug!("saved session under {:?}: {:?}", self.key, session),
            Err(err) => log::warn!("could not save session under {:?}: {}", self.key, err),
        }
    }

    /// Read the session back. `None` if the slot is empty, unreadable or
    /// holds anything other than a well-formed record.
    pub fn load(&self) -> Option<PersistedSession> {
        let raw = match self.slot.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no saved session under {:?}", self.key);
                return None;
            }
            Err(err) => {
                log::warn!("could not read session under {:?}: {}", self.key, err);
                return None;
            }
        };

        match PersistedSession::from_json(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("ignoring malformed session under {:?}: {}", self.key, err);
                None
            }
        }
    }

    /// Load, falling back to a zero tally with sound on and dark theme.
    pub fn load_or_default(&self) -> PersistedSession {
        self.load().unwrap_or_default()
    }
}
