//! The ordered item collection owned by a container.

use crate::types::{Item, ItemId};
use kurbo::Point;

/// Ordered sequence of items.
///
/// In list mode the order is the visual order; in canvas mode order is
/// irrelevant and `Item::position` governs placement. Read access is public,
/// mutation is reserved to the owning container.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<C> {
    items: Vec<Item<C>>,
}

impl<C> Default for Collection<C> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<C> Collection<C> {
    /// Build a collection from declared children, generating a fresh id for
    /// each one.
    ///
    /// Every rebuild regenerates ids, so ids held from a previous build no
    /// longer resolve.
    pub fn from_contents<I>(contents: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self {
            items: contents.into_iter().map(Item::with_generated_id).collect(),
        }
    }

    /// Build a collection from caller-supplied ids.
    ///
    /// Later duplicates of an id are dropped so ids stay unique.
    pub fn from_keyed<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, C)>,
    {
        Self::from_items(pairs.into_iter().map(|(id, content)| Item::new(id, content)))
    }

    /// Build a collection from complete items, dropping duplicate ids.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item<C>>,
    {
        let mut seen = std::collections::HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    tracing::warn!(id = %item.id, "Dropping item with duplicate id");
                }
                fresh
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item<C>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item<C>> {
        self.items.iter()
    }

    /// Index of the item with `id`, if present
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item<C>> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id.clone())
            .collect()
    }

    pub(crate) fn get_mut(&mut self, id: &ItemId) -> Option<&mut Item<C>> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    /// Write an absolute position onto a single item.
    ///
    /// Returns false if the item is not in the collection.
    pub(crate) fn place(&mut self, id: &ItemId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.position = Some(position);
                true
            }
            None => false,
        }
    }
}

impl<C: Clone> Collection<C> {
    /// Clone the items into a standalone vector
    pub fn to_vec(&self) -> Vec<Item<C>> {
        self.items.clone()
    }
}

impl<'a, C> IntoIterator for &'a Collection<C> {
    type Item = &'a Item<C>;
    type IntoIter = std::slice::Iter<'a, Item<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
