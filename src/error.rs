//! Console error types
//!
//! Contract violations are rejected at the state owner and reported back to
//! the operator as a notice. None of them are fatal.

use thiserror::Error;

use crate::models::{AlertId, CameraId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("camera {0} not found")]
    CameraNotFound(CameraId),

    #[error("alert {0} not found")]
    AlertNotFound(AlertId),

    #[error("no camera matches alert source '{0}'")]
    SourceCameraNotFound(String),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("asset unavailable: {0}")]
    MissingAsset(String),

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error("duplicate id {0} in seed data")]
    DuplicateId(u32),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
