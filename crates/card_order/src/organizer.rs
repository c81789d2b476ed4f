use crate::card::{Card, CardConfig, OrganizerInput};
use crate::error::{OrganizerError, Result};
use crate::key::CardKey;
use crate::placement::resolve;
use crate::surface::CardSurface;
use crate::tracker::OrderTracker;

/// Where a drag gesture stands. A drop returns the organizer to `Idle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        slot: usize,
        key: CardKey,
    },
}

/// Result of a movement tick that changed the order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub slot: usize,
    pub key: CardKey,
    pub from: usize,
    pub to: usize,
}

/// Drives drag gestures over a [`CardSurface`] and keeps the published
/// order in step with the surface.
pub struct CardOrganizer {
    cards: Vec<Card>,
    config: CardConfig,
    tracker: OrderTracker,
    phase: DragPhase,
}

impl CardOrganizer {
    pub fn new(cards: impl Into<Vec<Card>>, config: CardConfig) -> Result<Self> {
        let cards = cards.into();
        let tracker = OrderTracker::initialize(&cards, &config)?;
        tracing::info!(
            cards = cards.len(),
            unique = config.unique,
            mutation = config.mutation,
            "card organizer initialized"
        );
        Ok(Self {
            cards,
            config,
            tracker,
            phase: DragPhase::Idle,
        })
    }

    pub fn from_input(input: OrganizerInput) -> Result<Self> {
        let (cards, config) = input.into_parts()?;
        Self::new(cards, config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_input(OrganizerInput::from_json(json)?)
    }

    /// Bind the output sink. See [`OrderTracker::on_publish`].
    pub fn on_publish(mut self, on_publish: impl Fn(&str) + 'static) -> Self {
        self.tracker.set_on_publish(on_publish);
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn tracker(&self) -> &OrderTracker {
        &self.tracker
    }

    pub fn value(&self) -> &str {
        self.tracker.value()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Cards in input order; a card's index here is its slot.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards in the current order.
    pub fn ordered_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.tracker
            .slots()
            .iter()
            .filter_map(|&slot| self.cards.get(slot))
    }

    /// First card with `key` in input order.
    pub fn card(&self, key: &CardKey) -> Option<&Card> {
        self.cards.iter().find(|card| &card.key == key)
    }

    pub fn card_at(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    /// Begin dragging the first card with `key`.
    pub fn drag_start(&mut self, key: impl Into<CardKey>) -> Result<()> {
        let key = key.into();
        let Some(slot) = self.cards.iter().position(|card| card.key == key) else {
            return Err(OrganizerError::UnknownCard(key));
        };
        self.drag_start_at(slot)
    }

    /// Begin dragging the card in `slot`. Ignored when mutation is disabled.
    pub fn drag_start_at(&mut self, slot: usize) -> Result<()> {
        let Some(card) = self.cards.get(slot) else {
            return Err(OrganizerError::UnknownSlot(slot));
        };
        let key = card.key.clone();
        if !self.config.mutation {
            tracing::debug!(slot, key = %key, "drag ignored, mutation disabled");
            return Ok(());
        }
        tracing::debug!(slot, key = %key, "drag start");
        self.phase = DragPhase::Dragging { slot, key };
        Ok(())
    }

    /// Place the dragged card for the pointer at `pointer_y` and republish.
    ///
    /// Every tick is resolved from the surface's current geometry alone.
    /// Returns `None` when idle or when the card stayed where it was.
    pub fn on_move_tick<S: CardSurface>(
        &mut self,
        surface: &mut S,
        pointer_y: f64,
    ) -> Option<MoveOutcome> {
        let DragPhase::Dragging { slot, key } = &self.phase else {
            return None;
        };
        let (slot, key) = (*slot, key.clone());
        let from = self.tracker.slot_position(slot)?;

        let candidates = surface.candidates(slot);
        let target = resolve(pointer_y, &candidates).map(|bounds| bounds.slot);
        tracing::debug!(
            slot,
            key = %key,
            pointer_y,
            target = ?target,
            "placement resolved"
        );

        surface.move_before(slot, target);
        self.tracker.reorder_from(surface.arrangement());

        let to = self.tracker.slot_position(slot)?;
        (from != to).then_some(MoveOutcome {
            slot,
            key,
            from,
            to,
        })
    }

    /// End the gesture, returning the key that was dropped.
    pub fn on_drop(&mut self) -> Option<CardKey> {
        match std::mem::take(&mut self.phase) {
            DragPhase::Dragging { slot, key } => {
                tracing::debug!(slot, key = %key, order = self.tracker.value(), "drop");
                Some(key)
            }
            DragPhase::Idle => None,
        }
    }
}
