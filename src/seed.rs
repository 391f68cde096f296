//! Built-in mock roster used when the config file provides none

use crate::models::{Alert, AlertId, AssetRef, Camera, CameraId, Severity};

pub fn builtin_cameras() -> Vec<Camera> {
    vec![
        Camera::new(1, "Camera 01", "/image_c1e7a5.jpg", "/image_e9700c.png"),
        Camera::new(
            2,
            "Camera 02",
            "https://via.placeholder.com/150/EEEEEE/808080?text=Cam+02",
            "https://via.placeholder.com/1280x720.png?text=Feed+Cam+2",
        ),
    ]
}

pub fn builtin_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: AlertId(1),
            severity: Severity::High,
            title: String::from("High risk"),
            description: String::from("Camera 01 - violent behaviour"),
            camera_name: String::from("Camera 01"),
            camera_id: Some(CameraId(1)),
            time_label: String::from("12h 34m 45s"),
            clip: Some(AssetRef::new("https://www.w3schools.com/html/mov_bbb.mp4")),
            raised_at: None,
        },
        Alert {
            id: AlertId(2),
            severity: Severity::Medium,
            title: String::from("Medium risk"),
            description: String::from("Camera 02 - loitering near entrance"),
            camera_name: String::from("Camera 02"),
            camera_id: Some(CameraId(2)),
            time_label: String::from("03h 12m 05s"),
            clip: None,
            raised_at: None,
        },
        Alert {
            id: AlertId(3),
            severity: Severity::Low,
            title: String::from("Low risk"),
            description: String::from("Camera 01 - motion after hours"),
            camera_name: String::from("Camera 01"),
            camera_id: None,
            time_label: String::from("00h 45m 10s"),
            clip: None,
            raised_at: None,
        },
    ]
}
