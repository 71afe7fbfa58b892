//! Selection container - the single owner of a collection.
//!
//! The container holds the canonical item collection, the drag gesture
//! state, the rubber-band overlay and the last-known item layout boxes.
//! Consumers read through `&self` accessors and originate intents through
//! the event handlers below; nothing else mutates this state.
//!
//! ## Event flow
//!
//! ```text
//! item drag start  -> on_item_drag_start   (writes the drag payload)
//! drag over        -> on_drag_over         (prevents the platform default)
//! drop on item     -> on_item_drop         (list: reorder; canvas: bubbles)
//! drop on container-> on_container_drop    (canvas: place the item)
//! drag end         -> on_drag_end          (cancels if nothing accepted)
//! pointer down/move/up -> rubber-band selection (shift held at press)
//! ```

use crate::collection::Collection;
use crate::config::SelectorConfig;
use crate::constants::OUT_OF_SCOPE_MESSAGE;
use crate::error::{SelectorError, SelectorResult};
use crate::geometry::is_finite_rect;
use crate::input::{DragOverEvent, DropEvent, GestureOutcome, GestureState, PointerEvent};
use crate::notifications::{Toast, ToastManager};
use crate::profile_scope;
use crate::selection::RubberBand;
use crate::session::{self, DragDataTransfer, DragSessionPayload};
use crate::spatial_index::SpatialIndex;
use crate::strategy::{DropOutcome, DropStrategy, strategy_for};
use crate::types::{Item, ItemId, ItemLayoutHint, SelectionRange, SelectorMode};
use kurbo::{Point, Rect};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// What the rendering layer needs to draw one item wrapper
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a, C> {
    pub item: &'a Item<C>,
    pub hint: ItemLayoutHint,
    /// Absolute placement to apply, canvas only
    pub placement: Option<Point>,
    pub highlighted: bool,
    /// The item is the source of the drag in progress
    pub dragging: bool,
}

/// Owner of one collection and every gesture that rearranges it
pub struct SelectorContainer<C> {
    config: SelectorConfig,
    strategy: Box<dyn DropStrategy<C>>,
    collection: Collection<C>,
    gesture: GestureState,
    last_outcome: Option<GestureOutcome>,
    rubber_band: RubberBand,
    selection_range: SelectionRange,
    layout: SpatialIndex,
    toasts: ToastManager,
    revision: u64,
}

impl<C: Clone> SelectorContainer<C> {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            strategy: strategy_for(&config.mode),
            config,
            collection: Collection::default(),
            gesture: GestureState::default(),
            last_outcome: None,
            rubber_band: RubberBand::default(),
            selection_range: SelectionRange::default(),
            layout: SpatialIndex::new(),
            toasts: ToastManager::new(),
            revision: 0,
        }
    }

    /// Build a container and populate it from declared children
    pub fn with_children<I>(config: SelectorConfig, contents: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        let mut container = Self::new(config);
        container.set_children(contents);
        container
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn mode(&self) -> &SelectorMode {
        &self.config.mode
    }

    pub fn collection(&self) -> &Collection<C> {
        &self.collection
    }

    pub fn items(&self) -> &[Item<C>] {
        self.collection.items()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item<C>> {
        self.collection.get(id)
    }

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.collection.selected_ids()
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// How the most recent drag gesture ended
    pub fn last_outcome(&self) -> Option<GestureOutcome> {
        self.last_outcome
    }

    pub fn is_selecting(&self) -> bool {
        self.rubber_band.is_selecting()
    }

    /// Rubber-band overlay rectangle while selecting
    pub fn overlay(&self) -> Option<Rect> {
        self.rubber_band.overlay()
    }

    pub fn selection_range(&self) -> SelectionRange {
        self.selection_range
    }

    pub fn layout_of(&self, id: &ItemId) -> Option<Rect> {
        self.layout.bounds(id)
    }

    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    /// Bumped on every collection change; item wrappers re-render on change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of every item wrapper, in collection order
    pub fn views(&self) -> impl Iterator<Item = ItemView<'_, C>> {
        let hint = ItemLayoutHint::for_mode(&self.config.mode);
        let canvas = self.config.mode.is_canvas();
        let dragged = self.gesture.dragged_item_id();
        self.collection.iter().map(move |item| ItemView {
            item,
            hint,
            placement: if canvas { item.position } else { None },
            highlighted: item.selected,
            dragging: dragged == Some(&item.id),
        })
    }

    // ========================================================================
    // Collection mutation
    // ========================================================================

    /// Atomically swap the owned collection.
    pub fn replace_collection(&mut self, items: Vec<Item<C>>) {
        self.collection = Collection::from_items(items);
        let collection = &self.collection;
        self.layout.retain(|id| collection.contains(id));
        self.revision += 1;
        debug!(items = self.collection.len(), revision = self.revision, "Collection replaced");
    }

    /// Rebuild from declared children. All ids regenerate, so ids held from
    /// before the rebuild stop resolving.
    pub fn set_children<I>(&mut self, contents: I)
    where
        I: IntoIterator<Item = C>,
    {
        self.layout.clear();
        self.replace_collection(Collection::from_contents(contents).to_vec());
    }

    /// Rebuild from children with caller-supplied, stable ids.
    pub fn set_keyed_children<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (ItemId, C)>,
    {
        self.replace_collection(Collection::from_keyed(pairs).to_vec());
    }

    /// Record an item's current layout box, as reported by the rendering layer.
    pub fn report_layout(&mut self, id: &ItemId, bounds: Rect) -> SelectorResult<()> {
        if !self.collection.contains(id) {
            return Err(SelectorError::NotFound(id.clone()));
        }
        if !is_finite_rect(bounds) {
            debug!(%id, "Ignoring non-finite layout box");
            return Err(SelectorError::InvalidGeometry(format!("non-finite layout box for {id}")));
        }
        self.layout.insert(id.clone(), bounds);
        Ok(())
    }

    fn place_item(&mut self, id: &ItemId, position: Point) -> SelectorResult<()> {
        if !self.collection.place(id, position) {
            return Err(SelectorError::NotFound(id.clone()));
        }
        self.layout.move_to(id, position);
        self.revision += 1;
        debug!(%id, x = position.x, y = position.y, "Item placed");
        Ok(())
    }

    // ========================================================================
    // Drag and drop
    // ========================================================================

    /// Start dragging `id` with the pointer at `pointer`.
    ///
    /// The grab offset is measured from the item's last-known top-left. An
    /// item with no known placement is grabbed at its origin.
    pub fn on_item_drag_start(
        &mut self,
        id: &ItemId,
        pointer: Point,
        transfer: &mut dyn DragDataTransfer,
    ) -> SelectorResult<DragSessionPayload> {
        let item = self
            .collection
            .get(id)
            .ok_or_else(|| SelectorError::NotFound(id.clone()))?;

        let top_left = match self.layout.bounds(id).map(|bounds| bounds.origin()).or(item.position) {
            Some(top_left) => top_left,
            None => {
                debug!(%id, "No layout box at drag start, using zero grab offset");
                pointer
            }
        };

        let payload = session::begin_drag(id.clone(), top_left, pointer, transfer)?;
        self.gesture.start_dragging(id.clone());
        self.last_outcome = None;
        debug!(%id, dx = payload.pointer_offset.dx, dy = payload.pointer_offset.dy, "Drag started");
        Ok(payload)
    }

    /// Allow drops: every item and the container itself suppress the
    /// platform default on drag-over.
    pub fn on_drag_over(&self, event: &mut DragOverEvent) {
        event.prevent_default();
    }

    /// Drop onto the item `target_id`.
    ///
    /// Returns whether the drop was consumed. Out-of-scope drops raise an
    /// error toast and leave the collection unchanged.
    pub fn on_item_drop(&mut self, target_id: &ItemId, event: &mut DropEvent<'_>) -> SelectorResult<bool> {
        let result = self.item_drop(target_id, event);
        self.surface(result)
    }

    /// Drop onto the container background.
    pub fn on_container_drop(&mut self, event: &mut DropEvent<'_>) -> SelectorResult<bool> {
        let result = self.container_drop(event);
        self.surface(result)
    }

    /// The platform drag ended. A gesture still in progress was not accepted
    /// by any drop target and is cancelled.
    pub fn on_drag_end(&mut self) -> Option<GestureOutcome> {
        let outcome = self.gesture.finish(GestureOutcome::Cancelled);
        if outcome.is_some() {
            debug!("Drag cancelled");
            self.last_outcome = outcome;
        }
        self.last_outcome
    }

    fn item_drop(&mut self, target_id: &ItemId, event: &mut DropEvent<'_>) -> SelectorResult<bool> {
        let payload = self.accept_payload(&*event.transfer)?;
        match self.strategy.on_item_drop(&self.collection, target_id, &payload)? {
            DropOutcome::Bubble => self.container_drop_with(&payload, event),
            outcome => self.apply(outcome, event),
        }
    }

    fn container_drop(&mut self, event: &mut DropEvent<'_>) -> SelectorResult<bool> {
        if !self.strategy.accepts_container_drop() {
            trace!(mode = self.config.mode.label(), "Container is not a drop target");
            return Ok(false);
        }
        let payload = self.accept_payload(&*event.transfer)?;
        self.container_drop_with(&payload, event)
    }

    fn container_drop_with(
        &mut self,
        payload: &DragSessionPayload,
        event: &mut DropEvent<'_>,
    ) -> SelectorResult<bool> {
        match self
            .strategy
            .on_container_drop(&self.collection, event.position, payload)?
        {
            DropOutcome::Bubble => Ok(false),
            outcome => self.apply(outcome, event),
        }
    }

    /// Decode the payload and check it belongs to this collection
    fn accept_payload(&self, transfer: &dyn DragDataTransfer) -> SelectorResult<DragSessionPayload> {
        let payload = session::read_payload(transfer)?;
        if !session::end_drag(&payload, &self.collection) {
            return Err(SelectorError::NotFound(payload.source_id));
        }
        Ok(payload)
    }

    fn apply(&mut self, outcome: DropOutcome<C>, event: &mut DropEvent<'_>) -> SelectorResult<bool> {
        match outcome {
            DropOutcome::Reordered(items) => {
                self.replace_collection(items);
            }
            DropOutcome::Placed { id, position } => {
                self.place_item(&id, position)?;
                event.transfer.clear_data();
            }
            DropOutcome::Bubble | DropOutcome::Rejected => return Ok(false),
        }
        if let Some(outcome) = self.gesture.finish(GestureOutcome::Dropped) {
            self.last_outcome = Some(outcome);
        }
        Ok(true)
    }

    /// Report a failed event: user-visible errors become toasts, the rest
    /// are dropped quietly.
    fn surface<T>(&mut self, result: SelectorResult<T>) -> SelectorResult<T> {
        if let Err(err) = &result {
            if err.is_user_visible() {
                warn!(error = %err, "Drop rejected");
                self.toasts.remove_expired();
                self.toasts.push(Toast::error(OUT_OF_SCOPE_MESSAGE));
            } else {
                debug!(error = %err, "Ignoring drop");
            }
        }
        result
    }

    // ========================================================================
    // Rubber-band selection
    // ========================================================================

    /// Pointer down inside the container. Starts a selection only when shift
    /// is held.
    pub fn on_pointer_down(&mut self, event: &PointerEvent) -> bool {
        let started = self.rubber_band.press(event.position, event.modifiers);
        if let Some(range) = self.rubber_band.pending_range().filter(|_| started) {
            self.selection_range = range;
            trace!(x = event.position.x, y = event.position.y, "Selection started");
        }
        started
    }

    /// Pointer move. Returns the recomputed overlay while selecting.
    pub fn on_pointer_move(&mut self, event: &PointerEvent) -> Option<Rect> {
        let overlay = self.rubber_band.track(event.position)?;
        trace!(
            x = overlay.x0,
            y = overlay.y0,
            width = overlay.width(),
            height = overlay.height(),
            "Selection overlay"
        );
        Some(overlay)
    }

    /// Pointer up. Finalizes a running selection and returns the ids now
    /// selected, in collection order.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) -> Option<Vec<ItemId>> {
        let range = self.rubber_band.release(event.position)?;
        self.selection_range = range;
        let selected = self.finalize_selection(range);
        self.selection_range = SelectionRange::default();
        Some(selected)
    }

    fn finalize_selection(&mut self, range: SelectionRange) -> Vec<ItemId> {
        profile_scope!("finalize_selection");

        let Some(rect) = range.to_rect() else {
            return Vec::new();
        };

        let unplaced = self.collection.len().saturating_sub(self.layout.len());
        if unplaced > 0 {
            debug!(unplaced, "Items without a layout box are skipped");
        }

        let hits: HashSet<ItemId> = self.layout.query_contained(rect).into_iter().collect();
        let items = self
            .collection
            .iter()
            .map(|item| Item {
                selected: hits.contains(&item.id),
                ..item.clone()
            })
            .collect();
        self.replace_collection(items);

        let selected = self.collection.selected_ids();
        debug!(count = selected.len(), "Selection finalized");
        selected
    }
}
