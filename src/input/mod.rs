//! Input handling for the container.
//!
//! ## Architecture
//!
//! Drag gestures are tracked by an explicit state machine (`GestureState`)
//! instead of loose flags. Rubber-band selection has its own machine in
//! `crate::selection`, since it runs independently of the layout mode.
//!
//! ## Modules
//!
//! - `state` - Drag gesture state machine and outcomes
//! - `events` - Pointer, drag-over and drop events from the platform

mod events;
mod state;

pub use events::{DragOverEvent, DropEvent, Modifiers, PointerEvent};
pub use state::{GestureOutcome, GestureState};
