//! List reorder engine.
//!
//! Single-slot reordering: one source item is lifted out and reinserted next
//! to the target. Dragging toward the front lands the source before the
//! target, dragging toward the back lands it after.
//!
//! ```text
//! [A, B, C, D, E, F]  reorder(D -> B)  [A, D, B, C, E, F]
//! [A, B, C, D, E, F]  reorder(B -> E)  [A, C, D, E, B, F]
//! ```

use crate::error::{SelectorError, SelectorResult};
use crate::profile_scope;
use crate::types::{Item, ItemId};

/// Relocate the element at `from` next to the element at `to`.
///
/// Returns a new vector; `items` is left untouched. Out-of-range indices
/// return an unchanged copy.
pub fn relocate<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return items.to_vec();
    }

    let mut result = Vec::with_capacity(len);
    if from > to {
        // moving toward the front: insert before the target
        result.extend_from_slice(&items[..to]);
        result.push(items[from].clone());
        result.extend_from_slice(&items[to..from]);
        result.extend_from_slice(&items[from + 1..]);
    } else {
        // moving toward the back: insert after the target
        result.extend_from_slice(&items[..from]);
        result.extend_from_slice(&items[from + 1..=to]);
        result.push(items[from].clone());
        result.extend_from_slice(&items[to + 1..]);
    }
    result
}

/// Compute the new ordering after dragging `source_id` onto `target_id`.
///
/// Fails with `NotFound` if either id is absent.
pub fn reorder<C: Clone>(
    items: &[Item<C>],
    source_id: &ItemId,
    target_id: &ItemId,
) -> SelectorResult<Vec<Item<C>>> {
    profile_scope!("reorder");

    let index_of = |id: &ItemId| {
        items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| SelectorError::NotFound(id.clone()))
    };
    let source = index_of(source_id)?;
    let target = index_of(target_id)?;

    tracing::debug!(%source_id, %target_id, source, target, "Reordering list");
    Ok(relocate(items, source, target))
}
