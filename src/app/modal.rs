//! Modal coordinator - at most one overlay is open at a time

use crate::models::{Alert, AssetRef};

/// Which overlay is open. A tagged variant, so two modals can never be
/// open together.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    AlertDetail {
        alert: Alert,
        /// Feed of the camera selected when the modal opened
        backdrop: Option<AssetRef>,
    },
    AddCamera,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Modal::Closed => "closed",
            Modal::AlertDetail { .. } => "alert-detail",
            Modal::AddCamera => "add-camera",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ModalCoordinator {
    current: Modal,
}

impl ModalCoordinator {
    pub fn current(&self) -> &Modal {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_open()
    }

    /// Open the alert detail overlay, replacing whatever was open
    pub fn open_alert(&mut self, alert: Alert, backdrop: Option<AssetRef>) {
        self.current = Modal::AlertDetail { alert, backdrop };
    }

    pub fn open_add_camera(&mut self) {
        self.current = Modal::AddCamera;
    }

    /// Close any overlay. Returns the modal that was open.
    pub fn close(&mut self) -> Modal {
        std::mem::take(&mut self.current)
    }

    /// The alert shown by the detail overlay, if that overlay is open
    pub fn alert(&self) -> Option<&Alert> {
        match &self.current {
            Modal::AlertDetail { alert, .. } => Some(alert),
            _ => None,
        }
    }
}
