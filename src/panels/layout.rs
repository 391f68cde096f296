//! Screen geometry shared by drawing and mouse hit-testing

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::app::Modal;
use crate::constants::GRID_CELLS;
use crate::ui::centered_rect;

/// Width of the roster sidebar
pub const ROSTER_WIDTH: u16 = 32;

/// Lines per alert row (title + description)
pub const ALERT_ROW_HEIGHT: u16 = 2;

/// Lines per camera row (name + thumbnail)
pub const CAMERA_ROW_HEIGHT: u16 = 2;

/// Viewing pane control buttons, left to right
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewControl {
    Prev,
    Single,
    Grid,
    Next,
}

impl ViewControl {
    pub const ALL: [ViewControl; 4] = [
        ViewControl::Prev,
        ViewControl::Single,
        ViewControl::Grid,
        ViewControl::Next,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ViewControl::Prev => "◀ prev",
            ViewControl::Single => "▣ single",
            ViewControl::Grid => "▦ grid",
            ViewControl::Next => "next ▶",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub roster: Rect,
    pub roster_tabs: Rect,
    pub roster_list: Rect,
    pub roster_add: Rect,
    pub viewer: Rect,
    pub controls: [Rect; 4],
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Roster + viewer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(ROSTER_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        let roster_inner = body[0].inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let roster_parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Cameras | Alerts tabs
                Constraint::Min(0),    // List
                Constraint::Length(1), // Add camera
            ])
            .split(roster_inner);

        let viewer_parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(body[1]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(viewer_parts[1]);

        ScreenLayout {
            header: rows[0],
            roster: body[0],
            roster_tabs: roster_parts[0],
            roster_list: roster_parts[1],
            roster_add: roster_parts[2],
            viewer: viewer_parts[0],
            controls: [buttons[0], buttons[1], buttons[2], buttons[3]],
            status: rows[2],
        }
    }
}

/// The 2x2 grid cells of the viewing pane, row by row
pub fn grid_cells(viewer: Rect) -> [Rect; GRID_CELLS] {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(viewer);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(halves[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(halves[1]);
    [top[0], top[1], bottom[0], bottom[1]]
}

/// Clickable controls of the alert modal, left to right
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AlertControl {
    PlayPause,
    ViewLive,
}

impl AlertControl {
    pub const ALL: [AlertControl; 2] = [AlertControl::PlayPause, AlertControl::ViewLive];
}

/// Regions inside the alert modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertModalLayout {
    pub details: Rect,
    pub player: Rect,
    pub timeline: Rect,
    pub controls: [Rect; 2],
}

impl AlertModalLayout {
    /// `area` is the whole modal, border included
    pub fn compute(area: Rect) -> Self {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Description
                Constraint::Min(3),    // Player
                Constraint::Length(1), // Timeline
                Constraint::Length(3), // Controls
            ])
            .split(inner);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(rows[3]);

        AlertModalLayout {
            details: rows[0],
            player: rows[1],
            timeline: rows[2],
            controls: [buttons[0], buttons[1]],
        }
    }
}

/// Area covered by the modal content, if a modal is open
pub fn modal_area(modal: &Modal, area: Rect) -> Option<Rect> {
    match modal {
        Modal::Closed => None,
        Modal::AlertDetail { .. } => Some(centered_rect(70, 70, area)),
        Modal::AddCamera => Some(centered_rect(84, 90, area)),
    }
}

/// First visible row so that `cursor` stays on screen
pub fn scroll_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible_rows - 1)
}
