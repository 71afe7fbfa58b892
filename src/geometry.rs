//! Geometry utilities for drag and selection gestures.
//!
//! Pure functions over `kurbo` primitives: pointer offsets, rubber-band
//! rectangles and strict containment.

use kurbo::{Point, Rect, Vec2};

/// Offset of the pointer from an element's top-left corner.
#[inline]
pub fn pointer_offset(pointer: Point, top_left: Point) -> Vec2 {
    pointer - top_left
}

/// Rectangle spanned by a selection anchor and the current pointer.
///
/// Corners are min/max normalized so the result never has negative extents,
/// whichever direction the pointer moved.
#[inline]
pub fn selection_rect(anchor: Point, current: Point) -> Rect {
    Rect::from_points(anchor, current)
}

/// Whether `inner` lies strictly inside `outer` on all four edges.
///
/// Touching or straddling any edge does not count.
#[inline]
pub fn strictly_contains(outer: Rect, inner: Rect) -> bool {
    inner.x0 > outer.x0 && inner.x1 < outer.x1 && inner.y0 > outer.y0 && inner.y1 < outer.y1
}

/// Whether every coordinate of `rect` is finite.
#[inline]
pub fn is_finite_rect(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}
