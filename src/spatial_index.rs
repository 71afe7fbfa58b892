//! Spatial Index Module
//!
//! Keeps the last-known layout box of every item in an R-tree so rubber-band
//! finalization only tests items near the selection rectangle.

use crate::geometry::strictly_contains;
use crate::types::ItemId;
use kurbo::{Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an item's last-known layout box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, bounds: Rect) -> Self {
        Self {
            item_id,
            bounds: bounds.abs(),
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.x0, self.bounds.y0],
            [self.bounds.x1, self.bounds.y1],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// R-tree of item layout boxes keyed by item id.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, Rect>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the box for `item_id`.
    pub fn insert(&mut self, item_id: ItemId, bounds: Rect) {
        self.remove(&item_id);

        let entry = SpatialEntry::new(item_id.clone(), bounds);
        self.entries.insert(item_id, entry.bounds);
        self.tree.insert(entry);
    }

    pub fn remove(&mut self, item_id: &ItemId) -> bool {
        match self.entries.remove(item_id) {
            Some(bounds) => {
                self.tree.remove(&SpatialEntry::new(item_id.clone(), bounds));
                true
            }
            None => false,
        }
    }

    /// Move an item's box so its top-left sits at `origin`, keeping its size.
    ///
    /// Returns false if the item has no known box.
    pub fn move_to(&mut self, item_id: &ItemId, origin: Point) -> bool {
        match self.entries.get(item_id).copied() {
            Some(bounds) => {
                self.insert(item_id.clone(), bounds.with_origin(origin));
                true
            }
            None => false,
        }
    }

    pub fn bounds(&self, item_id: &ItemId) -> Option<Rect> {
        self.entries.get(item_id).copied()
    }

    /// Items whose box lies strictly inside `rect` (no shared edges).
    pub fn query_contained(&self, rect: Rect) -> Vec<ItemId> {
        let rect = rect.abs();
        let envelope = AABB::from_corners([rect.x0, rect.y0], [rect.x1, rect.y1]);

        self.tree
            .locate_in_envelope(&envelope)
            .filter(|entry| strictly_contains(rect, entry.bounds))
            .map(|entry| entry.item_id.clone())
            .collect()
    }

    /// Drop entries whose item is no longer present.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ItemId) -> bool,
    {
        let stale: Vec<ItemId> = self.entries.keys().filter(|id| !keep(*id)).cloned().collect();
        for id in stale {
            self.remove(&id);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
