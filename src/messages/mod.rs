//! Message types for inter-layer communication in the actor-based architecture.
//!
//! Intents flow from the panels up to the App actor; render snapshots flow
//! back down.

pub mod ui_events;
pub mod render;

pub use ui_events::{Intent, LayoutMode, RosterView};
pub use render::RenderState;
