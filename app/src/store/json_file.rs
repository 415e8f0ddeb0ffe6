//! JSON-file implementation of [`RoundStore`] — one document per key.

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use greenside::{Player, Round};

use super::{
    CURRENT_ROUND_KEY, PLAYER_KEY, ROUNDS_KEY, RoundStore, StoreResult, decode, encode,
};

/// File-backed store: `<dir>/<key>.json` per key. The directory is created
/// on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore { dir: dir.into() }
    }

    /// Returns `<platform data dir>/greenside`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("greenside")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    async fn read_key<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(decode(&contents)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_key<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.path_for(key), encode(value)?).await?;
        Ok(())
    }

    async fn delete_key(&self, key: &str) -> StoreResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl RoundStore for JsonFileStore {
    async fn load_player(&self) -> StoreResult<Option<Player>> {
        self.read_key(PLAYER_KEY).await
    }

    async fn save_player(&self, player: &Player) -> StoreResult<()> {
        self.write_key(PLAYER_KEY, player).await
    }

    async fn load_rounds(&self) -> StoreResult<Vec<Round>> {
        Ok(self.read_key(ROUNDS_KEY).await?.unwrap_or_default())
    }

    async fn save_rounds(&self, rounds: &[Round]) -> StoreResult<()> {
        self.write_key(ROUNDS_KEY, &rounds).await
    }

    async fn load_current_round(&self) -> StoreResult<Option<Round>> {
        self.read_key(CURRENT_ROUND_KEY).await
    }

    async fn save_current_round(&self, round: Option<&Round>) -> StoreResult<()> {
        match round {
            Some(round) => self.write_key(CURRENT_ROUND_KEY, round).await,
            None => self.delete_key(CURRENT_ROUND_KEY).await,
        }
    }

    async fn clear_all(&self) -> StoreResult<()> {
        for key in [PLAYER_KEY, ROUNDS_KEY, CURRENT_ROUND_KEY] {
            self.delete_key(key).await?;
        }
        Ok(())
    }
}
