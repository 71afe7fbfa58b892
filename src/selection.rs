//! Rubber-band selection.
//!
//! ```text
//! Inactive -> Selecting   (pointer down with shift held)
//! Selecting -> Selecting  (pointer move: overlay recomputed)
//! Selecting -> Inactive   (pointer up: rectangle finalized)
//! ```
//!
//! Requiring the modifier at press time keeps ordinary clicks and drag starts
//! from opening a selection.

use crate::geometry::selection_rect;
use crate::input::Modifiers;
use crate::types::SelectionRange;
use kurbo::{Point, Rect};

/// Rubber-band gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RubberBand {
    #[default]
    Inactive,
    Selecting {
        /// Pointer-down position
        anchor: Point,
        /// Latest pointer position
        current: Point,
    },
}

impl RubberBand {
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting { .. })
    }

    /// Begin selecting if the modifier condition holds.
    ///
    /// Returns true if the gesture started.
    pub fn press(&mut self, position: Point, modifiers: Modifiers) -> bool {
        if !modifiers.shift {
            return false;
        }
        *self = Self::Selecting {
            anchor: position,
            current: position,
        };
        true
    }

    /// Track the pointer and return the recomputed overlay rectangle.
    pub fn track(&mut self, position: Point) -> Option<Rect> {
        match self {
            Self::Selecting { current, .. } => {
                *current = position;
                self.overlay()
            }
            Self::Inactive => None,
        }
    }

    /// Current overlay rectangle, normalized to non-negative extents
    pub fn overlay(&self) -> Option<Rect> {
        match *self {
            Self::Selecting { anchor, current } => Some(selection_rect(anchor, current)),
            Self::Inactive => None,
        }
    }

    /// The range as known while the pointer is still down
    pub fn pending_range(&self) -> Option<SelectionRange> {
        match *self {
            Self::Selecting { anchor, .. } => Some(SelectionRange::anchored(anchor)),
            Self::Inactive => None,
        }
    }

    /// Finish the gesture at `position` and return the finalized range.
    pub fn release(&mut self, position: Point) -> Option<SelectionRange> {
        let range = match *self {
            Self::Selecting { anchor, .. } => {
                Some(SelectionRange::from_rect(selection_rect(anchor, position)))
            }
            Self::Inactive => None,
        };
        *self = Self::Inactive;
        range
    }
}
