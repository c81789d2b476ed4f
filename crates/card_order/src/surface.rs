use crate::key::CardKey;
use crate::placement::{CardBounds, insertion_index};

/// The host that lays cards out and physically moves them.
///
/// Cards are addressed by slot, the index of the card in the organizer's
/// input.
pub trait CardSurface {
    /// Slots of all cards in their current physical order.
    fn arrangement(&self) -> Vec<usize>;

    /// Bounds of every card except the `dragged` slot, in physical order.
    fn candidates(&self, dragged: usize) -> Vec<CardBounds>;

    /// Move `dragged` in front of `target`, or to the end when `target` is `None`.
    fn move_before(&mut self, dragged: usize, target: Option<usize>);
}

#[derive(Clone, Debug)]
struct StackEntry {
    slot: usize,
    key: CardKey,
    height: f64,
}

/// A vertical stack of cards kept in memory. Card tops are derived from the
/// heights of the cards above plus a fixed gap, so every move relays out the
/// stack.
#[derive(Clone, Debug, Default)]
pub struct StackSurface {
    entries: Vec<StackEntry>,
    gap: f64,
}

impl StackSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stack `keys` top to bottom, all with the same height.
    pub fn uniform<K: Into<CardKey>>(keys: impl IntoIterator<Item = K>, height: f64) -> Self {
        keys.into_iter()
            .fold(Self::new(), |stack, key| stack.card(key, height))
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Append a card below the others. Slots are handed out in call order.
    pub fn card(mut self, key: impl Into<CardKey>, height: f64) -> Self {
        self.entries.push(StackEntry {
            slot: self.entries.len(),
            key: key.into(),
            height,
        });
        self
    }

    /// Bounds of every card in physical order.
    pub fn bounds(&self) -> Vec<CardBounds> {
        let mut top = 0.0;
        self.entries
            .iter()
            .map(|entry| {
                let bounds = CardBounds {
                    slot: entry.slot,
                    key: entry.key.clone(),
                    top,
                    height: entry.height,
                };
                top += entry.height + self.gap;
                bounds
            })
            .collect()
    }

    pub fn midpoint_of(&self, slot: usize) -> Option<f64> {
        self.bounds()
            .into_iter()
            .find(|bounds| bounds.slot == slot)
            .map(|bounds| bounds.midpoint())
    }

    /// Keys in physical order.
    pub fn keys(&self) -> Vec<CardKey> {
        self.entries.iter().map(|entry| entry.key.clone()).collect()
    }

    fn position(&self, slot: usize) -> Option<usize> {
        self.entries.iter().position(|entry| entry.slot == slot)
    }
}

impl CardSurface for StackSurface {
    fn arrangement(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.slot).collect()
    }

    fn candidates(&self, dragged: usize) -> Vec<CardBounds> {
        self.bounds()
            .into_iter()
            .filter(|bounds| bounds.slot != dragged)
            .collect()
    }

    fn move_before(&mut self, dragged: usize, target: Option<usize>) {
        let Some(from_ix) = self.position(dragged) else {
            tracing::warn!(slot = dragged, "dragged card is not on the surface");
            return;
        };
        let target_ix = match target {
            Some(target) => {
                let Some(ix) = self.position(target) else {
                    tracing::warn!(slot = target, "target card is not on the surface");
                    return;
                };
                Some(ix)
            }
            None => None,
        };

        let to_ix = insertion_index(from_ix, target_ix, self.entries.len());
        if from_ix != to_ix {
            let entry = self.entries.remove(from_ix);
            self.entries.insert(to_ix, entry);
        }
    }
}
