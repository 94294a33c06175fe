use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    error::GardenResult,
    models::{Garden, PlantBlueprint},
    registry::GardenManager,
    stats::NetworkReport,
};

/// Cloneable handle that runs every registry operation under one exclusive lock.
#[derive(Debug, Clone, Default)]
pub struct SharedGardenManager {
    inner: Arc<Mutex<GardenManager>>,
}

impl SharedGardenManager {
    /// Wrap an existing registry.
    pub fn new(manager: GardenManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Register a garden for `owner`. See [`GardenManager::create_garden`].
    pub fn create_garden(&self, name: &str, owner: &str) -> GardenResult<()> {
        self.inner.lock().create_garden(name, owner).map(|_| ())
    }

    /// See [`GardenManager::add_plant`].
    pub fn add_plant(&self, owner: &str, blueprint: PlantBlueprint) -> GardenResult<()> {
        self.inner.lock().add_plant(owner, blueprint)
    }

    /// See [`GardenManager::grow_garden`].
    pub fn grow_garden(&self, owner: &str, days: i64) -> GardenResult<()> {
        self.inner.lock().grow_garden(owner, days)
    }

    /// Snapshot of `owner`'s garden.
    pub fn garden(&self, owner: &str) -> Option<Garden> {
        self.inner.lock().get_garden_by_owner(owner).cloned()
    }

    /// See [`GardenManager::generate_network_report`].
    pub fn generate_network_report(&self) -> NetworkReport {
        self.inner.lock().generate_network_report()
    }

    /// Run a read-only closure against the registry while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&GardenManager) -> R) -> R {
        f(&self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::models::PlantType;

    #[test]
    fn concurrent_mutations_are_serialised() {
        let shared = SharedGardenManager::default();
        shared.create_garden("Wonderland", "Alice").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for index in 0..25 {
                        let name = format!("Seedling {worker}-{index}");
                        shared
                            .add_plant("Alice", PlantBlueprint::new(PlantType::Plant, name, 0))
                            .unwrap();
                        shared.grow_garden("Alice", 1).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let garden = shared.garden("Alice").unwrap();
        assert_eq!(garden.len(), 100);
        assert_eq!(garden.total_growth(), 100);
        assert_eq!(shared.read(GardenManager::total_plants), 100);
        assert_eq!(shared.generate_network_report().rows[0].score, 1000);
    }

    #[test]
    fn errors_pass_through_the_lock() {
        let shared = SharedGardenManager::new(GardenManager::new());
        assert!(shared.grow_garden("Carol", 1).is_err());
        assert!(shared.garden("Carol").is_none());
        shared.create_garden("Wonderland", "Alice").unwrap();
        assert!(shared.create_garden("Elsewhere", "Alice").is_err());
        assert_eq!(shared.read(|manager| manager.garden_count()), 1);
    }
}
