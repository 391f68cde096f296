//! Camera and alert registries
//!
//! Read-mostly ordered containers. Insertion order is display order.
//! Mutation is crate-private; only the state owner inserts.

use std::collections::HashSet;

use crate::error::{ConsoleError, ConsoleResult};
use crate::models::{Alert, AlertId, Camera, CameraId};

/// Something with a stable numeric identity
pub trait Entity {
    type Id: Copy + Eq + Into<u32> + From<u32>;

    fn id(&self) -> Self::Id;

    fn not_found(id: Self::Id) -> ConsoleError;
}

impl From<CameraId> for u32 {
    fn from(id: CameraId) -> u32 {
        id.0
    }
}

impl From<u32> for CameraId {
    fn from(raw: u32) -> Self {
        CameraId(raw)
    }
}

impl From<AlertId> for u32 {
    fn from(id: AlertId) -> u32 {
        id.0
    }
}

impl From<u32> for AlertId {
    fn from(raw: u32) -> Self {
        AlertId(raw)
    }
}

impl Entity for Camera {
    type Id = CameraId;

    fn id(&self) -> CameraId {
        self.id
    }

    fn not_found(id: CameraId) -> ConsoleError {
        ConsoleError::CameraNotFound(id)
    }
}

impl Entity for Alert {
    type Id = AlertId;

    fn id(&self) -> AlertId {
        self.id
    }

    fn not_found(id: AlertId) -> ConsoleError {
        ConsoleError::AlertNotFound(id)
    }
}

#[derive(Clone, Debug)]
pub struct Registry<T: Entity> {
    items: Vec<T>,
}

pub type CameraRegistry = Registry<Camera>;
pub type AlertRegistry = Registry<Alert>;

impl<T: Entity> Default for Registry<T> {
    fn default() -> Self {
        Registry { items: Vec::new() }
    }
}

impl<T: Entity> Registry<T> {
    /// Build a registry from seed data, rejecting duplicate ids
    pub fn from_seed(items: Vec<T>) -> ConsoleResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            let raw: u32 = item.id().into();
            if !seen.insert(raw) {
                return Err(ConsoleError::DuplicateId(raw));
            }
        }
        Ok(Registry { items })
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn find_by_id(&self, id: T::Id) -> ConsoleResult<&T> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| T::not_found(id))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next free id: one past the largest id in use. `None` once the
    /// largest id is `u32::MAX`.
    pub fn next_id(&self) -> Option<T::Id> {
        let max = self
            .items
            .iter()
            .map(|item| item.id().into())
            .max()
            .unwrap_or(0u32);
        max.checked_add(1).map(<T::Id as From<u32>>::from)
    }

    pub(crate) fn insert(&mut self, item: T) -> ConsoleResult<()> {
        let raw: u32 = item.id().into();
        if self.contains(item.id()) {
            return Err(ConsoleError::DuplicateId(raw));
        }
        self.items.push(item);
        Ok(())
    }
}

impl Registry<Camera> {
    /// Case-insensitive lookup by display name
    pub fn find_by_name(&self, name: &str) -> Option<&Camera> {
        let wanted = name.trim();
        self.items
            .iter()
            .find(|camera| camera.name.trim().eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cameras() -> CameraRegistry {
        Registry::from_seed(vec![
            Camera::new(1, "Camera 01", "/c1.jpg", "/c1.png"),
            Camera::new(5, "Camera 02", "/c2.jpg", "/c2.png"),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let reg = cameras();
        let names: Vec<&str> = reg.list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Camera 01", "Camera 02"]);
    }

    #[test]
    fn test_find_by_id_reports_not_found() {
        let reg = cameras();
        assert_eq!(reg.find_by_id(CameraId(5)).unwrap().name, "Camera 02");
        assert_eq!(
            reg.find_by_id(CameraId(9)),
            Err(ConsoleError::CameraNotFound(CameraId(9)))
        );
    }

    #[test]
    fn test_duplicate_seed_ids_rejected() {
        let result = Registry::from_seed(vec![
            Camera::new(1, "A", "", ""),
            Camera::new(1, "B", "", ""),
        ]);
        assert_eq!(result.unwrap_err(), ConsoleError::DuplicateId(1));
    }

    #[test]
    fn test_next_id_and_insert() {
        let mut reg = cameras();
        let id = reg.next_id().unwrap();
        assert_eq!(id, CameraId(6));
        reg.insert(Camera { id, ..Camera::new(0, "Gate", "", "rtsp://gate") })
            .unwrap();
        assert_eq!(reg.list().last().unwrap().name, "Gate");
        assert!(reg.insert(Camera::new(1, "Dup", "", "")).is_err());
        assert_eq!(CameraRegistry::default().next_id(), Some(CameraId(1)));
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let reg = Registry::from_seed(vec![Camera::new(u32::MAX, "Last", "", "")]).unwrap();
        assert_eq!(reg.next_id(), None);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let reg = cameras();
        assert_eq!(reg.find_by_name("camera 02").unwrap().id, CameraId(5));
        assert!(reg.find_by_name("Camera 03").is_none());
    }
}
