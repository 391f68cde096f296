//! App state - pure data structure with no I/O logic

use crate::app::modal::{Modal, ModalCoordinator};
use crate::app::selection::Selection;
use crate::constants::GRID_CELLS;
use crate::error::ConsoleResult;
use crate::messages::render::{FeedProps, GridCell, Notice, RosterProps, ViewerProps};
use crate::messages::RenderState;
use crate::models::{Alert, Camera};
use crate::registry::{AlertRegistry, CameraRegistry, Registry};

/// Canonical console state, owned by the app actor.
///
/// Fields are private: everything outside this module goes through the
/// command methods in `commands.rs` or reads a `RenderState` snapshot.
pub struct ConsoleState {
    pub(super) cameras: CameraRegistry,
    pub(super) alerts: AlertRegistry,
    pub(super) selection: Selection,
    pub(super) modals: ModalCoordinator,
    pub(super) notice: Option<Notice>,
}

impl ConsoleState {
    pub fn new(cameras: CameraRegistry, alerts: AlertRegistry) -> Self {
        let selection = Selection::initial(&cameras);
        ConsoleState {
            cameras,
            alerts,
            selection,
            modals: ModalCoordinator::default(),
            notice: None,
        }
    }

    /// Build the state from seed lists, rejecting duplicate ids
    pub fn from_seed(cameras: Vec<Camera>, alerts: Vec<Alert>) -> ConsoleResult<Self> {
        Ok(Self::new(Registry::from_seed(cameras)?, Registry::from_seed(alerts)?))
    }

    pub fn cameras(&self) -> &CameraRegistry {
        &self.cameras
    }

    pub fn alerts(&self) -> &AlertRegistry {
        &self.alerts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn modal(&self) -> &Modal {
        self.modals.current()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn selected_camera(&self) -> Option<&Camera> {
        self.selection
            .selected()
            .and_then(|id| self.cameras.find_by_id(id).ok())
    }

    /// Derive the viewing pane props from selection, layout and registry
    pub fn viewer_props(&self) -> ViewerProps {
        let selected = self.selection.selected();
        let grid: [GridCell; GRID_CELLS] = std::array::from_fn(|index| match self.cameras.get(index) {
            Some(camera) => GridCell::Camera {
                feed: feed_props(camera),
                selected: Some(camera.id) == selected,
            },
            None => GridCell::Empty,
        });

        ViewerProps {
            layout: self.selection.layout(),
            camera: self.selected_camera().map(feed_props),
            grid,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            roster: RosterProps {
                cameras: self.cameras.list().to_vec(),
                alerts: self.alerts.list().to_vec(),
                selected: self.selection.selected(),
            },
            viewer: self.viewer_props(),
            modal: self.modals.current().clone(),
            notice: self.notice.clone(),
        }
    }
}

fn feed_props(camera: &Camera) -> FeedProps {
    FeedProps {
        id: camera.id,
        name: camera.name.clone(),
        feed: camera.feed.clone(),
    }
}
