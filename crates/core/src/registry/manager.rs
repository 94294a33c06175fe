use std::collections::HashMap;

use tracing::{info, warn};

use crate::{
    error::{GardenError, GardenResult},
    models::{Garden, PlantBlueprint},
    stats::NetworkReport,
};

/// Registry of gardens keyed by owner, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct GardenManager {
    gardens: Vec<Garden>,
    by_owner: HashMap<String, usize>,
}

impl GardenManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and register a garden for `owner`.
    ///
    /// An owner can hold only one garden; a second registration is rejected
    /// and the existing garden is left as it was.
    pub fn create_garden(
        &mut self,
        name: impl Into<String>,
        owner: impl Into<String>,
    ) -> GardenResult<&mut Garden> {
        self.add_garden(Garden::new(name, owner))
    }

    /// Register an already built garden under its owner.
    pub fn add_garden(&mut self, garden: Garden) -> GardenResult<&mut Garden> {
        if self.by_owner.contains_key(garden.owner()) {
            let err = GardenError::DuplicateOwner {
                owner: garden.owner().to_string(),
            };
            warn!(owner = %garden.owner(), "{err}");
            return Err(err);
        }

        info!(owner = %garden.owner(), garden = %garden.name(), "garden registered");
        let index = self.gardens.len();
        self.by_owner.insert(garden.owner().to_string(), index);
        self.gardens.push(garden);
        Ok(&mut self.gardens[index])
    }

    /// Garden registered for `owner`; `None` when there is none.
    pub fn get_garden_by_owner(&self, owner: &str) -> Option<&Garden> {
        let index = *self.by_owner.get(owner)?;
        self.gardens.get(index)
    }

    /// Mutable access to `owner`'s garden.
    pub fn get_garden_by_owner_mut(&mut self, owner: &str) -> Option<&mut Garden> {
        let index = *self.by_owner.get(owner)?;
        self.gardens.get_mut(index)
    }

    /// First garden registered under `name`. Names are not unique.
    pub fn get_garden_by_name(&self, name: &str) -> Option<&Garden> {
        self.gardens.iter().find(|garden| garden.name() == name)
    }

    /// Gardens in registration order.
    pub fn gardens(&self) -> &[Garden] {
        &self.gardens
    }

    /// Number of gardens created so far.
    pub fn garden_count(&self) -> usize {
        self.gardens.len()
    }

    /// Plants across every garden.
    pub fn total_plants(&self) -> usize {
        self.gardens.iter().map(Garden::len).sum()
    }

    /// Build the plant described by `blueprint` and append it to `owner`'s garden.
    ///
    /// Nothing is built when the owner is unknown.
    pub fn add_plant(&mut self, owner: &str, blueprint: PlantBlueprint) -> GardenResult<()> {
        let garden = self.garden_mut_or_report(owner)?;
        let plant = blueprint.build().map_err(|err| {
            warn!(owner, "{err}");
            err
        })?;

        info!(owner, plant = %plant.name(), "Added {} to {owner}'s garden", plant.name());
        garden.add_plant(plant);
        Ok(())
    }

    /// Add a plant described by a textual type tag such as `"FloweringPlant"`.
    ///
    /// The owner is looked up before the tag is parsed, so an unknown owner is
    /// reported as not found whatever the tag says.
    pub fn add_plant_tagged(
        &mut self,
        owner: &str,
        tag: &str,
        name: impl Into<String>,
        age: i64,
        color: Option<&str>,
        prize_points: Option<u32>,
    ) -> GardenResult<()> {
        self.garden_mut_or_report(owner)?;
        let mut blueprint = PlantBlueprint::from_tag(tag, name, age)?;
        if let Some(color) = color {
            blueprint = blueprint.color(color);
        }
        if let Some(points) = prize_points {
            blueprint = blueprint.prize_points(points);
        }
        self.add_plant(owner, blueprint)
    }

    /// Grow every plant in `owner`'s garden by `days` and record the growth once.
    pub fn grow_garden(&mut self, owner: &str, days: i64) -> GardenResult<()> {
        self.garden_mut_or_report(owner)?.grow_all(days)
    }

    /// Owner, garden name and score for every garden, plus the garden count.
    pub fn generate_network_report(&self) -> NetworkReport {
        NetworkReport::from_manager(self)
    }

    fn garden_mut_or_report(&mut self, owner: &str) -> GardenResult<&mut Garden> {
        match self.by_owner.get(owner) {
            Some(&index) => Ok(&mut self.gardens[index]),
            None => {
                let err = GardenError::GardenNotFound {
                    owner: owner.to_string(),
                };
                warn!(owner, "{err}");
                Err(err)
            }
        }
    }
}
