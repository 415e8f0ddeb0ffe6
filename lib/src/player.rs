//! Player identity. Display name only — there is no authentication.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Player {
        Player { name: name.into() }
    }
}
