use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{OrganizerError, Result};
use crate::key::CardKey;

/// A single card. `title` and `description` are carried for the host and
/// never interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub key: CardKey,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Any other per-card fields from the input record.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    pub fn new(
        key: impl Into<CardKey>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Auxiliary data the host may show, or `None` when the config hides it.
    pub fn exposed_data(&self, config: &CardConfig) -> Option<&Map<String, Value>> {
        config.hidden_data.then_some(&self.extra)
    }
}

/// Construction flags. Every flag defaults to `true`; an explicit `false`
/// is kept as given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardConfig {
    /// Reject duplicate keys at construction.
    pub unique: bool,
    /// Allow drag gestures to reorder cards.
    pub mutation: bool,
    /// Expose each card's auxiliary data to the host.
    pub hidden_data: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            unique: true,
            mutation: true,
            hidden_data: true,
        }
    }
}

impl CardConfig {
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn mutation(mut self, mutation: bool) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn hidden_data(mut self, hidden_data: bool) -> Self {
        self.hidden_data = hidden_data;
        self
    }
}

/// Raw construction input, as handed over by a host page:
/// `{ "data": [{ "key": .., "title": .., "description": .. }], "config": { .. } }`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OrganizerInput {
    pub data: Option<Vec<Card>>,
    pub config: Option<CardConfig>,
}

impl OrganizerInput {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_parts(self) -> Result<(Vec<Card>, CardConfig)> {
        let data = self.data.ok_or(OrganizerError::MissingInput("data"))?;
        Ok((data, self.config.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fields_default_to_true() {
        let config: CardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn explicit_false_is_honored() {
        let config: CardConfig =
            serde_json::from_str(r#"{"unique": false, "hiddenData": false}"#).unwrap();
        assert!(!config.unique);
        assert!(config.mutation);
        assert!(!config.hidden_data);
    }

    #[test]
    fn card_collects_extra_fields() {
        let card: Card =
            serde_json::from_str(r#"{"key": 7, "title": "T", "owner": "ana", "points": 3}"#)
                .unwrap();
        assert_eq!(card.key, CardKey::Int(7));
        assert_eq!(card.title, "T");
        assert_eq!(card.description, "");
        assert_eq!(card.extra.get("owner"), Some(&Value::from("ana")));
        assert_eq!(card.extra.len(), 2);
    }

    #[test]
    fn exposed_data_follows_config() {
        let card = Card::new(1, "a", "b").with_extra("owner", "ana");
        assert!(card.exposed_data(&CardConfig::default()).is_some());
        assert!(
            card.exposed_data(&CardConfig::default().hidden_data(false))
                .is_none()
        );
    }

    #[test]
    fn missing_data_is_an_error() {
        let input = OrganizerInput::from_json(r#"{"config": {"unique": false}}"#).unwrap();
        assert!(matches!(
            input.into_parts(),
            Err(OrganizerError::MissingInput("data"))
        ));
    }

    #[test]
    fn missing_config_uses_defaults() {
        let input = OrganizerInput::from_json(r#"{"data": [{"key": 1}]}"#).unwrap();
        let (cards, config) = input.into_parts().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(config, CardConfig::default());
    }
}
