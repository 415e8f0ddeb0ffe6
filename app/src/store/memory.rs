//! Shared in-memory implementation of [`RoundStore`].
//!
//! Stores the same serialized envelopes the file store writes, so tests
//! exercise the full encode/decode path. Clones share the underlying map,
//! letting a second service instance observe what the first persisted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use greenside::{Player, Round};

use super::{
    CURRENT_ROUND_KEY, PLAYER_KEY, ROUNDS_KEY, RoundStore, StoreResult, decode, encode,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn put(&self, key: &str, value: String) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

impl RoundStore for MemoryStore {
    async fn load_player(&self) -> StoreResult<Option<Player>> {
        self.get(PLAYER_KEY).map(|s| decode(&s)).transpose()
    }

    async fn save_player(&self, player: &Player) -> StoreResult<()> {
        self.put(PLAYER_KEY, encode(player)?);
        Ok(())
    }

    async fn load_rounds(&self) -> StoreResult<Vec<Round>> {
        match self.get(ROUNDS_KEY) {
            Some(s) => decode(&s),
            None => Ok(Vec::new()),
        }
    }

    async fn save_rounds(&self, rounds: &[Round]) -> StoreResult<()> {
        self.put(ROUNDS_KEY, encode(&rounds)?);
        Ok(())
    }

    async fn load_current_round(&self) -> StoreResult<Option<Round>> {
        self.get(CURRENT_ROUND_KEY).map(|s| decode(&s)).transpose()
    }

    async fn save_current_round(&self, round: Option<&Round>) -> StoreResult<()> {
        match round {
            Some(round) => self.put(CURRENT_ROUND_KEY, encode(round)?),
            None => self.remove(CURRENT_ROUND_KEY),
        }
        Ok(())
    }

    async fn clear_all(&self) -> StoreResult<()> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        Ok(())
    }
}
