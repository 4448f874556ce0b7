//! In-memory per-chat location store.
//!
//! One record per chat id, created once at process start and injected into
//! the handlers. Nothing survives a restart; that is a stated requirement
//! of the bot, not an oversight.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::directory::Location;

/// What the bot remembers about one conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRecord {
    pub location: Location,
    pub alerts_enabled: bool,
}

/// Process-wide mapping from chat id to the last saved location.
#[derive(Debug, Default)]
pub struct LocationStore {
    inner: RwLock<HashMap<i64, ChatRecord>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The saved location for a chat, if any.
    pub async fn get(&self, chat_id: i64) -> Option<Location> {
        self.inner.read().await.get(&chat_id).map(|r| r.location.clone())
    }

    /// Save a location, overwriting any previous record.
    ///
    /// A freshly set location always starts with alerts disabled; enabling
    /// them is a separate transition.
    pub async fn set(&self, chat_id: i64, location: Location) {
        let record = ChatRecord { location, alerts_enabled: false };
        self.inner.write().await.insert(chat_id, record);
    }

    /// Remove a chat's record, returning it if one existed.
    pub async fn clear(&self, chat_id: i64) -> Option<ChatRecord> {
        self.inner.write().await.remove(&chat_id)
    }

    /// Flip the alerts flag. Returns `false` when the chat has no saved
    /// location (alerts require one).
    pub async fn set_alerts(&self, chat_id: i64, enabled: bool) -> bool {
        match self.inner.write().await.get_mut(&chat_id) {
            Some(record) => {
                record.alerts_enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub async fn alerts_enabled(&self, chat_id: i64) -> bool {
        self.inner
            .read()
            .await
            .get(&chat_id)
            .map(|r| r.alerts_enabled)
            .unwrap_or(false)
    }
}
