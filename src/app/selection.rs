//! Camera selection and viewing layout

use crate::error::ConsoleResult;
use crate::messages::ui_events::LayoutMode;
use crate::models::CameraId;
use crate::registry::CameraRegistry;

/// Active camera and layout.
///
/// `selected` is `None` only while the camera registry is empty. Every
/// mutation is checked against the registry passed in by the owner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    selected: Option<CameraId>,
    layout: LayoutMode,
}

impl Selection {
    /// Start on the first registered camera in single view
    pub fn initial(cameras: &CameraRegistry) -> Self {
        Selection {
            selected: cameras.first().map(|c| c.id),
            layout: LayoutMode::Single,
        }
    }

    pub fn selected(&self) -> Option<CameraId> {
        self.selected
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Select a camera by id. Unknown ids are rejected and leave the
    /// selection untouched.
    pub fn select(&mut self, cameras: &CameraRegistry, id: CameraId) -> ConsoleResult<()> {
        cameras.find_by_id(id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Returns true when the layout actually changed
    pub fn set_layout(&mut self, mode: LayoutMode) -> bool {
        let changed = self.layout != mode;
        self.layout = mode;
        changed
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
    }

    /// Move the selection one camera forward or back, wrapping around
    pub fn step(&mut self, cameras: &CameraRegistry, forward: bool) {
        if cameras.is_empty() {
            return;
        }
        let len = cameras.len();
        let current = self
            .selected
            .and_then(|id| cameras.position(id))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            current.checked_sub(1).unwrap_or(len - 1)
        };
        self.selected = cameras.get(next).map(|c| c.id);
    }

    /// Re-establish the selection invariant after the registry changed
    pub fn reconcile(&mut self, cameras: &CameraRegistry) {
        let valid = self.selected.is_some_and(|id| cameras.contains(id));
        if !valid {
            self.selected = cameras.first().map(|c| c.id);
        }
    }
}
