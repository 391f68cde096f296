//! Render state - immutable snapshot sent from the App layer to the UI

use crate::app::modal::Modal;
use crate::constants::GRID_CELLS;
use crate::messages::ui_events::LayoutMode;
use crate::models::{Alert, AssetRef, Camera, CameraId};

/// The selected camera as the viewing pane and header see it
#[derive(Debug, Clone, PartialEq)]
pub struct FeedProps {
    pub id: CameraId,
    pub name: String,
    pub feed: AssetRef,
}

/// One cell of the 2x2 grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Camera { feed: FeedProps, selected: bool },
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerProps {
    pub layout: LayoutMode,
    pub camera: Option<FeedProps>,
    pub grid: [GridCell; GRID_CELLS],
}

impl Default for ViewerProps {
    fn default() -> Self {
        ViewerProps {
            layout: LayoutMode::Single,
            camera: None,
            grid: std::array::from_fn(|_| GridCell::Empty),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterProps {
    pub cameras: Vec<Camera>,
    pub alerts: Vec<Alert>,
    pub selected: Option<CameraId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message from the state owner to the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub roster: RosterProps,
    pub viewer: ViewerProps,
    pub modal: Modal,
    pub notice: Option<Notice>,
}

impl RenderState {
    pub fn header_title(&self) -> &str {
        self.viewer
            .camera
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("No camera")
    }
}
