//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "CamDeck";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cells in the grid layout (2x2)
pub const GRID_CELLS: usize = 4;

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".camdeck";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Log file written when the config does not name one
pub const DEFAULT_LOG_FILE: &str = "camdeck.log";

/// Add-camera form defaults
pub const DEFAULT_CAMERA_NAME: &str = "Camera 01";
pub const DEFAULT_SERVICE_URL: &str = "http://ip:port/onvif/device_service";
pub const DEFAULT_LIVE_STREAM_URL: &str = "rtsp://ip:port/h264_ulaw.sdp";

/// Devices offered by the add-camera form: (label, ONVIF service URL)
pub const ONVIF_SUGGESTIONS: [(&str, &str); 2] = [
    ("IP_Camera (BUILD_123)", "http://192.168.1.64:80/onvif/device_service"),
    ("IP_Camera (BUILD_124)", "http://192.168.1.65:80/onvif/device_service"),
];
