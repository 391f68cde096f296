//! # CamDeck TUI
//!
//! A terminal video-surveillance console driven by in-memory mock data.
//!
//! ## Features
//! - Camera roster with selection
//! - Single and 2x2 grid viewing layouts
//! - Alert review overlay with a placeholder clip player
//! - Add-camera (ONVIF/RTSP) form
//! - Roster seeding from `~/.camdeck/config.yaml`
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous rendering of immutable snapshots
//! - Input router - key/mouse events to panel-local updates or intents
//! - App Layer - single owner of the console state

pub mod constants;
pub mod error;
pub mod models;
pub mod registry;
pub mod seed;
pub mod config;
pub mod messages;
pub mod app;
pub mod ui;
pub mod panels;
pub mod input;

// Re-export commonly used types
pub use models::{Alert, AlertId, AssetRef, Camera, CameraId, NewCamera, Severity};
pub use error::{ConsoleError, ConsoleResult};
pub use registry::{AlertRegistry, CameraRegistry};
pub use messages::{Intent, LayoutMode, RenderState, RosterView};
pub use app::{ActorHandle, AppActor, ConsoleState, Modal};
pub use config::ConsoleConfig;
pub use panels::PanelState;
