//! Durable key-value persistence for player, round history, and the
//! in-flight round.
//!
//! Each value is one serialized JSON document under a fixed key, wrapped in
//! a `format_version`-tagged envelope. Writes fully overwrite their key;
//! two sequential writes to the same key converge to the second.

pub mod json_file;
pub mod memory;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use greenside::{Player, Round};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Storage key for the player record.
pub const PLAYER_KEY: &str = "player";
/// Storage key for the completed-round history.
pub const ROUNDS_KEY: &str = "rounds";
/// Storage key for the in-flight round.
pub const CURRENT_ROUND_KEY: &str = "current_round";

/// Format tag written into every stored envelope.
pub const STORE_FORMAT_VERSION: u16 = 1;

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Message(String),
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "store io error: {e}"),
            Self::Serde(e) => write!(f, "store encoding error: {e}"),
            Self::Message(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
            Self::Message(_) => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Versioned wrapper around every stored document. Unknown extra fields
/// inside `value` are tolerated on read; unknown versions are not.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    format_version: u16,
    value: T,
}

pub(crate) fn encode<T: Serialize>(value: &T) -> StoreResult<String> {
    let envelope = Envelope {
        format_version: STORE_FORMAT_VERSION,
        value,
    };
    Ok(serde_json::to_string(&envelope)?)
}

pub(crate) fn decode<T: DeserializeOwned>(data: &str) -> StoreResult<T> {
    let envelope: Envelope<T> = serde_json::from_str(data)?;
    if envelope.format_version != STORE_FORMAT_VERSION {
        return Err(StoreError::Message(format!(
            "unsupported store format version {}",
            envelope.format_version
        )));
    }
    Ok(envelope.value)
}

/// Durable key-value gateway for the scorecard state.
///
/// Load operations return the stored value or its absent form; save
/// operations fully overwrite the key. `save_current_round(None)` deletes
/// the stored key. Implementations report failures — degradation to
/// defaults is the service layer's call.
#[allow(async_fn_in_trait)]
pub trait RoundStore {
    async fn load_player(&self) -> StoreResult<Option<Player>>;
    async fn save_player(&self, player: &Player) -> StoreResult<()>;
    async fn load_rounds(&self) -> StoreResult<Vec<Round>>;
    async fn save_rounds(&self, rounds: &[Round]) -> StoreResult<()>;
    async fn load_current_round(&self) -> StoreResult<Option<Round>>;
    async fn save_current_round(&self, round: Option<&Round>) -> StoreResult<()>;
    async fn clear_all(&self) -> StoreResult<()>;
}
