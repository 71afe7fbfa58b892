//! Canvas reposition engine.

use crate::session::DragSessionPayload;
use kurbo::{Point, Vec2};

/// Placement for a dropped item that keeps the grab point under the cursor.
#[inline]
pub fn reposition(drop_pointer: Point, payload: &DragSessionPayload) -> Point {
    drop_pointer - Vec2::from(payload.pointer_offset)
}
