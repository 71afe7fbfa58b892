//! Headless drag-to-rearrange engine.
//!
//! A [`SelectorContainer`] owns an ordered collection of opaque items and
//! turns platform drag, drop and pointer events into rearrangements:
//!
//! - **list mode**: dropping one item onto another reorders the collection
//! - **canvas mode**: dropping on the container places the item at absolute
//!   coordinates, keeping the grab point under the cursor
//! - **rubber-band selection** (both modes): shift-drag a rectangle to select
//!   every item lying strictly inside it
//!
//! Rendering is left to the caller, which reads item snapshots and reports
//! layout boxes back.

pub mod canvas;
pub mod collection;
pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod geometry;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod reorder;
pub mod selection;
pub mod session;
pub mod spatial_index;
pub mod strategy;
pub mod types;

pub use collection::Collection;
pub use config::SelectorConfig;
pub use container::{ItemView, SelectorContainer};
pub use error::{SelectorError, SelectorResult};
pub use session::{DragDataBag, DragDataTransfer, DragSessionPayload, PointerOffset};
pub use types::{FlowDirection, Item, ItemId, SelectionRange, SelectorMode};

pub use kurbo::{Point, Rect, Size, Vec2};
