//! Command handlers - the only way canonical state changes

use tracing::{debug, info, warn};

use crate::app::modal::Modal;
use crate::app::state::ConsoleState;
use crate::error::{ConsoleError, ConsoleResult};
use crate::messages::render::Notice;
use crate::messages::ui_events::{Intent, LayoutMode};
use crate::models::{AlertId, Camera, CameraId, NewCamera};

impl ConsoleState {
    // ========================
    // Selection & layout
    // ========================

    pub fn select_camera(&mut self, id: CameraId) -> ConsoleResult<()> {
        self.selection.select(&self.cameras, id)?;
        debug!(camera = %id, "camera selected");
        Ok(())
    }

    pub fn select_next_camera(&mut self) {
        self.selection.step(&self.cameras, true);
    }

    pub fn select_prev_camera(&mut self) {
        self.selection.step(&self.cameras, false);
    }

    pub fn set_layout(&mut self, mode: LayoutMode) {
        if self.selection.set_layout(mode) {
            debug!(layout = mode.as_str(), "layout changed");
        }
    }

    pub fn toggle_layout(&mut self) {
        self.selection.toggle_layout();
    }

    // ========================
    // Modals
    // ========================

    /// Open the alert detail overlay. The selected camera's feed is
    /// captured now and stays the backdrop until the modal closes.
    pub fn open_alert_modal(&mut self, id: AlertId) -> ConsoleResult<()> {
        let alert = self.alerts.find_by_id(id)?.clone();
        let backdrop = self.selected_camera().map(|c| c.feed.clone());
        self.modals.open_alert(alert, backdrop);
        Ok(())
    }

    pub fn open_add_camera_modal(&mut self) {
        self.modals.open_add_camera();
    }

    pub fn close_modal(&mut self) {
        let was = self.modals.close();
        if was.is_open() {
            debug!(modal = was.name(), "modal closed");
        }
    }

    /// Leave the alert overlay and switch to the alert's camera in single
    /// view. The overlay closes even when the camera cannot be found.
    pub fn view_live(&mut self) -> ConsoleResult<()> {
        let alert = self
            .modals
            .alert()
            .cloned()
            .ok_or(ConsoleError::InvalidState("no alert is open"))?;
        self.modals.close();

        let camera_id = alert
            .camera_id
            .filter(|id| self.cameras.contains(*id))
            .or_else(|| self.cameras.find_by_name(&alert.camera_name).map(|c| c.id))
            .ok_or_else(|| ConsoleError::SourceCameraNotFound(alert.camera_name.clone()))?;

        self.selection.select(&self.cameras, camera_id)?;
        self.selection.set_layout(LayoutMode::Single);
        Ok(())
    }

    // ========================
    // Add camera
    // ========================

    /// Validate the form and register the new camera. Returns its id.
    pub fn submit_camera(&mut self, form: NewCamera) -> ConsoleResult<CameraId> {
        if !matches!(self.modals.current(), Modal::AddCamera) {
            return Err(ConsoleError::InvalidState("add-camera form is not open"));
        }

        let name = form.name.trim();
        if name.is_empty() {
            return Err(ConsoleError::InvalidCamera("name is required".into()));
        }
        if self.cameras.find_by_name(name).is_some() {
            return Err(ConsoleError::InvalidCamera(format!(
                "a camera named '{}' already exists",
                name
            )));
        }
        let stream = form.live_stream_url.trim();
        if stream.is_empty() {
            return Err(ConsoleError::InvalidCamera("live stream URL is required".into()));
        }

        let id = self
            .cameras
            .next_id()
            .ok_or_else(|| ConsoleError::InvalidCamera("no free camera id".into()))?;
        self.cameras.insert(Camera::new(id.0, name, stream, stream))?;
        self.selection.reconcile(&self.cameras);
        self.modals.close();

        info!(
            camera = %id,
            camera_name = name,
            service_url = form.service_url.trim(),
            has_credentials = !form.username.is_empty(),
            "camera added"
        );
        Ok(id)
    }

    // ========================
    // Intent dispatch
    // ========================

    /// Route an intent to its command. Background intents are refused
    /// while a modal is open.
    pub fn dispatch(&mut self, intent: Intent) -> ConsoleResult<()> {
        if intent.is_background() && self.modals.is_open() {
            return Err(ConsoleError::InvalidState(
                "background panels are disabled while a modal is open",
            ));
        }

        match intent {
            Intent::SelectCamera(id) => self.select_camera(id)?,
            Intent::SelectNextCamera => self.select_next_camera(),
            Intent::SelectPrevCamera => self.select_prev_camera(),
            Intent::SetLayout(mode) => self.set_layout(mode),
            Intent::ToggleLayout => self.toggle_layout(),
            Intent::OpenAlert(id) => self.open_alert_modal(id)?,
            Intent::OpenAddCamera => self.open_add_camera_modal(),
            Intent::CloseModal => self.close_modal(),
            Intent::ViewLive => self.view_live()?,
            Intent::SubmitCamera(form) => {
                let id = self.submit_camera(form)?;
                if let Ok(camera) = self.cameras.find_by_id(id) {
                    self.notice = Some(Notice::info(format!(
                        "Added {} ({})",
                        camera.name, camera.id
                    )));
                }
            }
            Intent::Quit => {}
        }
        Ok(())
    }

    /// Dispatch an intent, turning a rejection into a status-bar notice.
    /// State is left unchanged on rejection.
    pub fn apply(&mut self, intent: Intent) {
        let name = intent.name();
        self.notice = None;
        match self.dispatch(intent) {
            Ok(()) => debug!(intent = name, modal = self.modals.current().name(), "intent applied"),
            Err(e) => {
                warn!(intent = name, error = %e, "intent rejected");
                self.notice = Some(Notice::error(e.to_string()));
            }
        }
    }
}
