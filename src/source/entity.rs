use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::lyrics::LyricSnapshot;

/// Entity id prefix of media players, the only entities that carry lyrics.
pub const MEDIA_PLAYER_DOMAIN: &str = "media_player.";

/// Anything the card can read a lyric snapshot from.
pub trait EntitySource {
    /// Snapshot of `entity_id`, or `None` when the entity is not present.
    fn lyric_snapshot(&self, entity_id: &str) -> Option<LyricSnapshot>;
}

/// Strings are kept and numbers are stringified; anything else is absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// A non-object `attributes` value reads as no attributes at all.
fn lenient_attributes<'de, D>(deserializer: D) -> Result<EntityAttributes, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(EntityAttributes::deserialize(&value).unwrap_or_default())
}

/// Attributes the card reads from an entity. JSON `null`, missing keys and
/// values of an unexpected type are all treated as absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EntityAttributes {
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_lyric: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub next_lyric: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub media_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub media_artist: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub friendly_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EntityState {
    #[serde(default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_attributes")]
    pub attributes: EntityAttributes,
}

impl EntityState {
    /// Interpret one raw entity entry. Only a non-object entry fails.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }

    pub fn to_snapshot(&self) -> LyricSnapshot {
        let attrs = &self.attributes;
        LyricSnapshot {
            current_line: attrs.current_lyric.clone().unwrap_or_default(),
            next_line: attrs.next_lyric.clone(),
            media_title: attrs.media_title.clone().unwrap_or_default(),
            media_artist: attrs.media_artist.clone().unwrap_or_default(),
        }
    }
}

/// A media player entry for the entity listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPlayer {
    pub entity_id: String,
    pub name: String,
    /// Host state such as "playing", or "unknown" when not reported
    pub state: String,
}

/// One host notification: every entity id mapped to its raw state.
///
/// Entries are kept as JSON values and interpreted on lookup, so a sibling
/// entity with an odd shape never costs the observed entity its update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatesNotification {
    states: BTreeMap<String, Value>,
}

/// Accepted line shapes: the bare mapping, or a host object with a `states` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { states: BTreeMap<String, Value> },
    Bare(BTreeMap<String, Value>),
}

impl StatesNotification {
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        let states = match serde_json::from_str::<Envelope>(line)? {
            Envelope::Wrapped { states } | Envelope::Bare(states) => states,
        };
        Ok(Self { states })
    }

    pub fn get(&self, entity_id: &str) -> Option<EntityState> {
        let value = self.states.get(entity_id)?;
        let state = EntityState::from_value(value);
        if state.is_none() {
            log::debug!("Entity {} is not an object, ignoring it", entity_id);
        }
        state
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Media player entities sorted by id, named by their friendly name when set.
    pub fn media_players(&self) -> Vec<MediaPlayer> {
        self.states
            .iter()
            .filter(|(id, _)| id.starts_with(MEDIA_PLAYER_DOMAIN))
            .map(|(id, value)| {
                let state = EntityState::from_value(value).unwrap_or_default();
                MediaPlayer {
                    entity_id: id.clone(),
                    name: state
                        .attributes
                        .friendly_name
                        .unwrap_or_else(|| id.clone()),
                    state: state.state.unwrap_or_else(|| "unknown".to_string()),
                }
            })
            .collect()
    }
}

impl EntitySource for StatesNotification {
    fn lyric_snapshot(&self, entity_id: &str) -> Option<LyricSnapshot> {
        self.get(entity_id).as_ref().map(EntityState::to_snapshot)
    }
}
