//! Mode-specific drop handling.
//!
//! Each layout mode is a strategy chosen once when the container is built, so
//! no event handler has to branch on the mode. Strategies only compute what a
//! drop means; the container applies the result.

use crate::canvas::reposition;
use crate::collection::Collection;
use crate::error::SelectorResult;
use crate::reorder::reorder;
use crate::session::DragSessionPayload;
use crate::types::{Item, ItemId, SelectorMode};
use kurbo::Point;
use std::fmt;

/// What a drop should do to the collection
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome<C> {
    /// Replace the collection with a new ordering
    Reordered(Vec<Item<C>>),
    /// Place one item at an absolute position
    Placed { id: ItemId, position: Point },
    /// Let the event continue to the enclosing drop target
    Bubble,
    /// Not a drop target in this mode
    Rejected,
}

/// Drop capability shared by every layout mode
pub trait DropStrategy<C>: fmt::Debug {
    /// Whether the container background is a drop target in this mode
    fn accepts_container_drop(&self) -> bool;

    /// Drop onto the item `target_id`
    fn on_item_drop(
        &self,
        collection: &Collection<C>,
        target_id: &ItemId,
        payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>>;

    /// Drop onto the container itself at `position`
    fn on_container_drop(
        &self,
        collection: &Collection<C>,
        position: Point,
        payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>>;
}

/// Reorder-by-insertion: items are the drop targets
#[derive(Debug, Default, Clone, Copy)]
pub struct ListStrategy;

impl<C: Clone> DropStrategy<C> for ListStrategy {
    fn accepts_container_drop(&self) -> bool {
        false
    }

    fn on_item_drop(
        &self,
        collection: &Collection<C>,
        target_id: &ItemId,
        payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>> {
        let items = reorder(collection.items(), &payload.source_id, target_id)?;
        Ok(DropOutcome::Reordered(items))
    }

    fn on_container_drop(
        &self,
        _collection: &Collection<C>,
        _position: Point,
        _payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>> {
        Ok(DropOutcome::Rejected)
    }
}

/// Reposition-by-coordinates: the container is the drop target
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasStrategy;

impl<C> DropStrategy<C> for CanvasStrategy {
    fn accepts_container_drop(&self) -> bool {
        true
    }

    fn on_item_drop(
        &self,
        _collection: &Collection<C>,
        _target_id: &ItemId,
        _payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>> {
        // items are not drop targets on a canvas; the container is
        Ok(DropOutcome::Bubble)
    }

    fn on_container_drop(
        &self,
        _collection: &Collection<C>,
        position: Point,
        payload: &DragSessionPayload,
    ) -> SelectorResult<DropOutcome<C>> {
        Ok(DropOutcome::Placed {
            id: payload.source_id.clone(),
            position: reposition(position, payload),
        })
    }
}

/// Pick the strategy for `mode`
pub fn strategy_for<C: Clone>(mode: &SelectorMode) -> Box<dyn DropStrategy<C>> {
    match mode {
        SelectorMode::List { .. } => Box::new(ListStrategy),
        SelectorMode::Canvas { .. } => Box::new(CanvasStrategy),
    }
}
