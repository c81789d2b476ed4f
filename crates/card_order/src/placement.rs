use crate::key::CardKey;

/// Vertical extent of a card that is not being dragged.
#[derive(Clone, Debug, PartialEq)]
pub struct CardBounds {
    /// Input index of the card.
    pub slot: usize,
    pub key: CardKey,
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(slot: usize, key: impl Into<CardKey>, top: f64, height: f64) -> Self {
        Self {
            slot,
            key: key.into(),
            top,
            height,
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Pick the card the dragged card should be inserted before.
///
/// That is the candidate whose midpoint lies below `pointer_y` and closest to
/// it. `None` means the pointer is past every midpoint and the dragged card
/// goes to the end. On equal offsets the earlier candidate wins.
pub fn resolve(pointer_y: f64, candidates: &[CardBounds]) -> Option<&CardBounds> {
    let (_, closest) = candidates.iter().fold(
        (f64::NEG_INFINITY, None),
        |(closest_offset, closest), candidate| {
            let offset = pointer_y - candidate.top - candidate.height / 2.0;
            if offset < 0.0 && offset > closest_offset {
                (offset, Some(candidate))
            } else {
                (closest_offset, closest)
            }
        },
    );
    closest
}

/// Index the dragged card ends up at after moving it from `from_ix` to the
/// gap in front of `target_ix` (or past the last card when `None`).
///
/// `target_ix` indexes the arrangement before the move.
pub fn insertion_index(from_ix: usize, target_ix: Option<usize>, item_count: usize) -> usize {
    match target_ix {
        // the dragged card no longer sits above the target once lifted
        Some(target_ix) if target_ix > from_ix => target_ix - 1,
        Some(target_ix) => target_ix,
        None => item_count.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds_at_midpoints(midpoints: &[(i64, f64)]) -> Vec<CardBounds> {
        midpoints
            .iter()
            .enumerate()
            .map(|(slot, &(key, mid))| CardBounds::new(slot, key, mid - 20.0, 40.0))
            .collect()
    }

    #[test]
    fn picks_nearest_midpoint_below_pointer() {
        let candidates = bounds_at_midpoints(&[(1, 100.0), (2, 200.0)]);
        let target = resolve(150.0, &candidates).unwrap();
        assert_eq!(target.key, CardKey::Int(2));
        assert_eq!(target.midpoint(), 200.0);
    }

    #[test]
    fn pointer_below_every_midpoint_targets_end() {
        let candidates = bounds_at_midpoints(&[(1, 100.0), (2, 200.0)]);
        assert!(resolve(250.0, &candidates).is_none());
    }

    #[test]
    fn pointer_above_everything_targets_first() {
        let candidates = bounds_at_midpoints(&[(1, 100.0), (2, 200.0), (3, 300.0)]);
        assert_eq!(resolve(0.0, &candidates).unwrap().key, CardKey::Int(1));
    }

    #[test]
    fn pointer_on_midpoint_is_not_above_it() {
        let candidates = bounds_at_midpoints(&[(1, 100.0), (2, 200.0)]);
        assert_eq!(resolve(100.0, &candidates).unwrap().key, CardKey::Int(2));
    }

    #[test]
    fn ties_favor_first_candidate() {
        let candidates = vec![
            CardBounds::new(0, "A", 100.0, 50.0),
            CardBounds::new(1, "B", 100.0, 50.0),
        ];
        assert_eq!(resolve(10.0, &candidates).unwrap().key, CardKey::from("A"));
    }

    #[test]
    fn ties_between_equal_keys_favor_earlier_slot() {
        let candidates = vec![CardBounds::new(4, 2, 0.0, 60.0), CardBounds::new(1, 2, 0.0, 60.0)];
        assert_eq!(resolve(5.0, &candidates).unwrap().slot, 4);
    }

    #[test]
    fn unordered_candidates_still_pick_nearest() {
        let candidates = bounds_at_midpoints(&[(3, 300.0), (1, 100.0), (2, 200.0)]);
        assert_eq!(resolve(120.0, &candidates).unwrap().key, CardKey::Int(2));
    }

    #[test]
    fn no_candidates_targets_end() {
        assert!(resolve(42.0, &[]).is_none());
    }

    #[test]
    fn insertion_moves_item_down() {
        // drop after last
        assert_eq!(insertion_index(1, None, 4), 3);
        // before D
        assert_eq!(insertion_index(1, Some(3), 4), 2);
    }

    #[test]
    fn insertion_moves_item_up() {
        assert_eq!(insertion_index(3, Some(1), 4), 1);
        assert_eq!(insertion_index(2, Some(0), 4), 0);
    }

    #[test]
    fn insertion_noop_when_dropped_around_self() {
        let from_ix = 1;
        assert_eq!(insertion_index(from_ix, Some(from_ix + 1), 3), from_ix);
        assert_eq!(insertion_index(2, None, 3), 2);
    }
}
