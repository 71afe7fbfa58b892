//! Platform input events consumed by the container.

use crate::session::DragDataTransfer;
use kurbo::Point;

/// Modifier keys held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Pointer down, move or up inside the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            modifiers: Modifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Drag-over event. The platform only delivers a drop to targets that
/// prevented the default here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragOverEvent {
    pub position: Point,
    default_prevented: bool,
}

impl DragOverEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Drop event carrying the pointer position and the drag-data bag
pub struct DropEvent<'a> {
    pub position: Point,
    pub transfer: &'a mut dyn DragDataTransfer,
}

impl<'a> DropEvent<'a> {
    pub fn new(position: Point, transfer: &'a mut dyn DragDataTransfer) -> Self {
        Self { position, transfer }
    }
}
