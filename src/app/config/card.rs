use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CardConfig {
    /// Media player entity to follow, e.g. "media_player.cloud_music"
    #[serde(default)]
    pub entity: String,
}

impl CardConfig {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
        }
    }

    pub fn has_entity(&self) -> bool {
        !self.entity.is_empty()
    }
}
