//! Drag session protocol.
//!
//! A drag carries one short-lived payload from the item where the gesture
//! started to wherever it is dropped. The payload travels through the
//! platform's drag-data bag, modeled by [`DragDataTransfer`], and is
//! serialized only at the two touchpoints: written once at drag start, read
//! once at drop.

use crate::collection::Collection;
use crate::constants::DRAG_PAYLOAD_FORMAT;
use crate::error::{SelectorError, SelectorResult};
use crate::geometry::pointer_offset;
use crate::types::ItemId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pointer position minus the dragged element's top-left at drag start
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerOffset {
    pub dx: f64,
    pub dy: f64,
}

impl PointerOffset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite()
    }
}

impl From<Vec2> for PointerOffset {
    fn from(v: Vec2) -> Self {
        Self { dx: v.x, dy: v.y }
    }
}

impl From<PointerOffset> for Vec2 {
    fn from(o: PointerOffset) -> Self {
        Vec2::new(o.dx, o.dy)
    }
}

/// Payload carried for the duration of one drag gesture
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragSessionPayload {
    /// Item where the gesture started
    pub source_id: ItemId,
    /// Grab point relative to the item's top-left
    pub pointer_offset: PointerOffset,
}

impl DragSessionPayload {
    pub fn new(source_id: ItemId, pointer_offset: PointerOffset) -> Self {
        Self {
            source_id,
            pointer_offset,
        }
    }

    /// Index of the source item in `collection`, if it belongs there
    pub fn resolve<C>(&self, collection: &Collection<C>) -> Option<usize> {
        collection.position_of(&self.source_id)
    }

    pub fn encode(&self) -> SelectorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a payload; malformed data is reported as invalid geometry
    pub fn decode(data: &str) -> SelectorResult<Self> {
        let payload: Self = serde_json::from_str(data)
            .map_err(|e| SelectorError::InvalidGeometry(format!("malformed drag payload: {e}")))?;
        if !payload.pointer_offset.is_finite() {
            return Err(SelectorError::InvalidGeometry(
                "non-finite pointer offset".to_string(),
            ));
        }
        Ok(payload)
    }
}

// ============================================================================
// Drag-data channel
// ============================================================================

/// The platform's drag-data bag: string values keyed by format
pub trait DragDataTransfer {
    fn set_data(&mut self, format: &str, data: String);
    fn get_data(&self, format: &str) -> Option<String>;
    fn clear_data(&mut self);
}

/// In-memory drag-data bag
#[derive(Clone, Debug, Default)]
pub struct DragDataBag {
    entries: HashMap<String, String>,
}

impl DragDataBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DragDataTransfer for DragDataBag {
    fn set_data(&mut self, format: &str, data: String) {
        self.entries.insert(format.to_string(), data);
    }

    fn get_data(&self, format: &str) -> Option<String> {
        self.entries.get(format).cloned()
    }

    fn clear_data(&mut self) {
        self.entries.clear();
    }
}

// ============================================================================
// Touchpoints
// ============================================================================

/// Start a drag session: capture the grab offset and write the payload.
pub fn begin_drag(
    source_id: ItemId,
    origin_top_left: Point,
    pointer: Point,
    transfer: &mut dyn DragDataTransfer,
) -> SelectorResult<DragSessionPayload> {
    let offset = pointer_offset(pointer, origin_top_left);
    let payload = DragSessionPayload::new(source_id, offset.into());
    transfer.set_data(DRAG_PAYLOAD_FORMAT, payload.encode()?);
    Ok(payload)
}

/// Read the payload written by [`begin_drag`].
pub fn read_payload(transfer: &dyn DragDataTransfer) -> SelectorResult<DragSessionPayload> {
    let data = transfer
        .get_data(DRAG_PAYLOAD_FORMAT)
        .ok_or_else(|| SelectorError::InvalidGeometry("no drag payload".to_string()))?;
    DragSessionPayload::decode(&data)
}

/// Whether `payload` can be consumed by `collection`.
///
/// Drops whose source is not part of the collection are not consumed.
pub fn end_drag<C>(payload: &DragSessionPayload, collection: &Collection<C>) -> bool {
    payload.resolve(collection).is_some()
}
