mod card;
mod error;
mod key;
mod organizer;
mod placement;
mod surface;
mod tracker;

pub use card::{Card, CardConfig, OrganizerInput};
pub use error::{OrganizerError, Result};
pub use key::CardKey;
pub use organizer::{CardOrganizer, DragPhase, MoveOutcome};
pub use placement::{CardBounds, insertion_index, resolve};
pub use surface::{CardSurface, StackSurface};
pub use tracker::OrderTracker;
