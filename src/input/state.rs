//! Drag gesture state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (drag start on an item)
//! Dragging -> Idle [Dropped]   (a drop target under the current mode accepted)
//! Dragging -> Idle [Cancelled] (drag ended without a qualifying drop)
//! ```
//!
//! `Dropped` and `Cancelled` are outcomes, not resting states: the machine is
//! back to `Idle` as soon as the gesture is resolved, and the outcome is kept
//! for inspection until the next gesture starts.

use crate::types::ItemId;

/// How the last drag gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A drop target accepted the payload
    Dropped,
    /// The drag ended without a qualifying drop; nothing changed
    Cancelled,
}

/// Drag gesture state owned by the container
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No drag in progress
    #[default]
    Idle,

    /// An item from this container is being dragged
    Dragging {
        /// Item the gesture started on
        source_id: ItemId,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<&ItemId> {
        match self {
            Self::Dragging { source_id } => Some(source_id),
            Self::Idle => None,
        }
    }

    pub fn start_dragging(&mut self, source_id: ItemId) {
        *self = Self::Dragging { source_id };
    }

    /// Resolve the gesture and return to `Idle`.
    ///
    /// Returns the outcome only if a gesture was actually in progress.
    pub fn finish(&mut self, outcome: GestureOutcome) -> Option<GestureOutcome> {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        was_dragging.then_some(outcome)
    }
}
