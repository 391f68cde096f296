//! UI events - intents emitted by the panels to the state owner

use crate::models::{AlertId, CameraId, NewCamera};

/// Viewing pane arrangement
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LayoutMode {
    #[default]
    Single,
    Grid,
}

impl LayoutMode {
    pub fn toggle(&self) -> LayoutMode {
        match self {
            LayoutMode::Single => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::Single,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LayoutMode::Single => "single",
            LayoutMode::Grid => "grid",
        }
    }
}

/// Which list the roster sidebar shows. Panel-local only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RosterView {
    #[default]
    Cameras,
    Alerts,
}

impl RosterView {
    pub fn toggle(&self) -> RosterView {
        match self {
            RosterView::Cameras => RosterView::Alerts,
            RosterView::Alerts => RosterView::Cameras,
        }
    }
}

/// Intents sent from the panels to the app actor
#[derive(Debug, Clone)]
pub enum Intent {
    // Roster
    SelectCamera(CameraId),
    OpenAlert(AlertId),
    OpenAddCamera,

    // Viewing pane
    SetLayout(LayoutMode),
    ToggleLayout,
    SelectNextCamera,
    SelectPrevCamera,

    // Modals
    CloseModal,
    ViewLive,
    SubmitCamera(NewCamera),

    // System
    Quit,
}

impl Intent {
    /// Intents coming from panels that sit behind an open modal
    pub fn is_background(&self) -> bool {
        matches!(
            self,
            Intent::SelectCamera(_)
                | Intent::SetLayout(_)
                | Intent::ToggleLayout
                | Intent::SelectNextCamera
                | Intent::SelectPrevCamera
        )
    }

    /// Short name for log lines
    pub fn name(&self) -> &'static str {
        match self {
            Intent::SelectCamera(_) => "select_camera",
            Intent::OpenAlert(_) => "open_alert",
            Intent::OpenAddCamera => "open_add_camera",
            Intent::SetLayout(_) => "set_layout",
            Intent::ToggleLayout => "toggle_layout",
            Intent::SelectNextCamera => "select_next_camera",
            Intent::SelectPrevCamera => "select_prev_camera",
            Intent::CloseModal => "close_modal",
            Intent::ViewLive => "view_live",
            Intent::SubmitCamera(_) => "submit_camera",
            Intent::Quit => "quit",
        }
    }
}
