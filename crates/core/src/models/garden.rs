use tracing::{info, warn};

use super::Plant;
use crate::error::{GardenError, GardenResult};

/// Owner-scoped collection of plants in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    name: String,
    owner: String,
    plants: Vec<Plant>,
    total_growth: u64,
}

impl Garden {
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            plants: Vec::new(),
            total_growth: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Plants in the order they were added.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Days of growth recorded through [`Garden::add_growth`].
    pub fn total_growth(&self) -> u64 {
        self.total_growth
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Append a plant. Duplicate names are allowed.
    pub fn add_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    /// Record `days` of growth on the garden counter only; plant ages are untouched.
    pub fn add_growth(&mut self, days: i64) -> GardenResult<()> {
        match self.grown_total(days) {
            Ok(total) => {
                self.total_growth = total;
                Ok(())
            }
            Err(err) => {
                warn!(owner = %self.owner, "{err}");
                Err(err)
            }
        }
    }

    fn grown_total(&self, days: i64) -> GardenResult<u64> {
        let delta = u64::try_from(days).map_err(|_| GardenError::NegativeDays { days })?;
        self.total_growth
            .checked_add(delta)
            .ok_or_else(|| GardenError::GrowthOverflow {
                owner: self.owner.clone(),
                days,
            })
    }

    /// Grow every plant by `days` and record it on the counter.
    ///
    /// All plants are checked first so a rejected delta changes nothing.
    pub fn grow_all(&mut self, days: i64) -> GardenResult<()> {
        if let Err(err) = self.check_growth(days) {
            warn!(owner = %self.owner, "{err}");
            return Err(err);
        }

        info!(owner = %self.owner, days, "{} is helping all plants grow...", self.owner);
        for plant in &mut self.plants {
            plant.grow(days)?;
        }
        self.add_growth(days)
    }

    fn check_growth(&self, days: i64) -> GardenResult<()> {
        self.grown_total(days)?;
        self.plants
            .iter()
            .try_for_each(|plant| plant.grown_age(days).map(|_| ()))
    }

    /// Sum of the plants' scores.
    pub fn calculate_score(&self) -> u64 {
        self.plants.iter().map(Plant::score).sum()
    }
}
