//! App layer - central state management and intent processing
//!
//! The App actor receives intents from the panels, updates the canonical
//! state through the command methods, and emits render snapshots.

pub mod state;
pub mod selection;
pub mod modal;
pub mod actor;
pub mod commands;

pub use state::ConsoleState;
pub use modal::Modal;
pub use actor::{ActorHandle, AppActor};
