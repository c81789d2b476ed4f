use std::collections::HashSet;
use std::rc::Rc;

use crate::card::{Card, CardConfig};
use crate::error::{OrganizerError, Result};
use crate::key::CardKey;

/// Owns the current card order and publishes its keys as a comma-joined
/// value.
///
/// Cards are identified by their slot, the index they had in the input, so
/// cards sharing a key stay apart.
pub struct OrderTracker {
    slot_keys: Vec<CardKey>,
    slots: Vec<usize>,
    keys: Vec<CardKey>,
    value: String,
    on_publish: Option<Rc<dyn Fn(&str)>>,
}

impl OrderTracker {
    /// Record the keys of `cards` in input order and publish them.
    ///
    /// With `config.unique`, the scan stops at the first repeated key and
    /// nothing is published.
    pub fn initialize(cards: &[Card], config: &CardConfig) -> Result<Self> {
        let mut slot_keys = Vec::with_capacity(cards.len());
        let mut seen = HashSet::with_capacity(cards.len());
        for (index, card) in cards.iter().enumerate() {
            if config.unique && !seen.insert(&card.key) {
                tracing::warn!(key = %card.key, index, "duplicate card key");
                return Err(OrganizerError::DuplicateKey {
                    key: card.key.clone(),
                    index,
                });
            }
            slot_keys.push(card.key.clone());
        }

        let mut tracker = Self {
            slots: (0..slot_keys.len()).collect(),
            keys: slot_keys.clone(),
            slot_keys,
            value: String::new(),
            on_publish: None,
        };
        tracker.publish();
        Ok(tracker)
    }

    /// Bind the output sink. The sink receives the current value right away.
    pub fn on_publish(mut self, on_publish: impl Fn(&str) + 'static) -> Self {
        self.set_on_publish(on_publish);
        self
    }

    pub fn set_on_publish(&mut self, on_publish: impl Fn(&str) + 'static) {
        let on_publish: Rc<dyn Fn(&str)> = Rc::new(on_publish);
        on_publish(&self.value);
        self.on_publish = Some(on_publish);
    }

    /// Write the current key order to [`value`](Self::value) and the bound sink.
    pub fn publish(&mut self) {
        self.value = self
            .keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        if let Some(on_publish) = self.on_publish.as_ref() {
            on_publish(&self.value);
        }
    }

    /// Take the physical arrangement of slots as the new order and publish it.
    ///
    /// The arrangement must be a permutation of the tracked slots.
    pub fn reorder_from(&mut self, arrangement: impl Into<Vec<usize>>) {
        let arrangement = arrangement.into();
        debug_assert_eq!(arrangement.len(), self.slots.len());
        self.keys = arrangement
            .iter()
            .map(|&slot| self.slot_keys[slot].clone())
            .collect();
        self.slots = arrangement;
        self.publish();
    }

    /// Keys in the current order.
    pub fn keys(&self) -> &[CardKey] {
        &self.keys
    }

    /// Slots in the current order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn key_of(&self, slot: usize) -> Option<&CardKey> {
        self.slot_keys.get(slot)
    }

    /// Current position of the first card with `key`.
    pub fn position(&self, key: &CardKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn slot_position(&self, slot: usize) -> Option<usize> {
        self.slots.iter().position(|&s| s == slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
