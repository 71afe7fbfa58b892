//! Core types for the selector.
//!
//! Defines the arrangement unit (`Item`), its identifier, the layout modes and
//! the rubber-band `SelectionRange`.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque item identifier, unique within one collection.
///
/// Generated ids are only stable for the lifetime of one collection build.
/// Callers that need identity across rebuilds supply their own.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(format!("id-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// Items
// ============================================================================

/// The unit of arrangement.
///
/// `content` is an opaque renderable payload supplied by the rendering layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<C> {
    /// Unique identifier within the owning collection
    pub id: ItemId,
    /// Renderable payload, never interpreted here
    pub content: C,
    /// Absolute placement (canvas mode only)
    pub position: Option<Point>,
    /// Set by rubber-band selection
    pub selected: bool,
}

impl<C> Item<C> {
    pub fn new(id: ItemId, content: C) -> Self {
        Self {
            id,
            content,
            position: None,
            selected: false,
        }
    }

    /// Create an item with a freshly generated id
    pub fn with_generated_id(content: C) -> Self {
        Self::new(ItemId::generate(), content)
    }
}

// ============================================================================
// Layout modes
// ============================================================================

/// Flow direction of a list container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    Row,
    #[default]
    Column,
}

/// Layout mode of a container, with the settings each mode requires
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectorMode {
    /// Item order determines placement
    List { direction: FlowDirection },
    /// Items carry absolute coordinates inside a fixed-size container
    Canvas { width: f64, height: f64 },
}

impl SelectorMode {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    pub fn is_canvas(&self) -> bool {
        matches!(self, Self::Canvas { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::List { .. } => "list",
            Self::Canvas { .. } => "canvas",
        }
    }
}

impl Default for SelectorMode {
    fn default() -> Self {
        Self::List {
            direction: FlowDirection::default(),
        }
    }
}

/// How the rendering layer should size an item wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemLayoutHint {
    /// Stretch to share the list's main axis
    Stretch,
    /// Keep intrinsic size (canvas)
    Intrinsic,
}

impl ItemLayoutHint {
    pub fn for_mode(mode: &SelectorMode) -> Self {
        match mode {
            SelectorMode::List { .. } => Self::Stretch,
            SelectorMode::Canvas { .. } => Self::Intrinsic,
        }
    }
}

// ============================================================================
// Selection range
// ============================================================================

/// Rubber-band range, owned by the container.
///
/// Only the anchor is known while the pointer is down; the end is filled in on
/// release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: Option<f64>,
    pub end_y: Option<f64>,
}

impl SelectionRange {
    /// A range anchored at `start` with no end yet
    pub fn anchored(start: Point) -> Self {
        Self {
            start_x: start.x,
            start_y: start.y,
            end_x: None,
            end_y: None,
        }
    }

    /// A finalized range covering `rect`
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            start_x: rect.x0,
            start_y: rect.y0,
            end_x: Some(rect.x1),
            end_y: Some(rect.y1),
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.end_x.is_some() && self.end_y.is_some()
    }

    /// The covered rectangle, once both ends are known
    pub fn to_rect(&self) -> Option<Rect> {
        match (self.end_x, self.end_y) {
            (Some(end_x), Some(end_y)) => Some(Rect::new(self.start_x, self.start_y, end_x, end_y)),
            _ => None,
        }
    }
}
