use std::{fmt, str::FromStr};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{GardenError, GardenResult};

const PLANT_SCORE: u64 = 10;
const FLOWERING_SCORE: u64 = 20;

/// Tag naming one of the three plant variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PlantType {
    /// Base plant without extra attributes.
    Plant,
    /// Plant with a bloom colour.
    FloweringPlant,
    /// Flowering plant that carries prize points.
    PrizeFlower,
}

impl PlantType {
    /// Every variant, in taxonomy order.
    pub const ALL: [PlantType; 3] = [
        PlantType::Plant,
        PlantType::FloweringPlant,
        PlantType::PrizeFlower,
    ];

    /// Canonical name used in reports and accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            PlantType::Plant => "Plant",
            PlantType::FloweringPlant => "FloweringPlant",
            PlantType::PrizeFlower => "PrizeFlower",
        }
    }

    /// Fixed score contributed by the variant before any prize points.
    pub fn base_score(self) -> u64 {
        match self {
            PlantType::Plant => PLANT_SCORE,
            PlantType::FloweringPlant | PlantType::PrizeFlower => FLOWERING_SCORE,
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantType {
    type Err = GardenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        PlantType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GardenError::UnknownPlantType(trimmed.to_string()))
    }
}

/// Variant-specific attributes of a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PlantKind {
    #[serde(rename = "Plant")]
    Plain,
    #[serde(rename = "FloweringPlant")]
    Flowering { color: String },
    #[serde(rename = "PrizeFlower")]
    Prize { color: String, prize_points: u32 },
}

/// A named, aged garden entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plant {
    name: String,
    age: u64,
    #[serde(flatten)]
    kind: PlantKind,
}

impl Plant {
    /// Create a base plant. A negative age is reported and stored as 0.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self::with_kind(name, age, PlantKind::Plain)
    }

    /// Create a flowering plant of the given colour.
    pub fn flowering(name: impl Into<String>, age: i64, color: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            age,
            PlantKind::Flowering {
                color: color.into(),
            },
        )
    }

    /// Create a prize flower carrying `prize_points`.
    pub fn prize_flower(
        name: impl Into<String>,
        age: i64,
        color: impl Into<String>,
        prize_points: u32,
    ) -> Self {
        Self::with_kind(
            name,
            age,
            PlantKind::Prize {
                color: color.into(),
                prize_points,
            },
        )
    }

    /// Create a plant from explicit variant attributes.
    pub fn with_kind(name: impl Into<String>, age: i64, kind: PlantKind) -> Self {
        let name = name.into();
        let age = match non_negative_age(age) {
            Ok(age) => age,
            Err(err) => {
                warn!(plant = %name, "{err}, age set to 0");
                0
            }
        };
        Self { name, age, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    pub fn kind(&self) -> &PlantKind {
        &self.kind
    }

    pub fn plant_type(&self) -> PlantType {
        match self.kind {
            PlantKind::Plain => PlantType::Plant,
            PlantKind::Flowering { .. } => PlantType::FloweringPlant,
            PlantKind::Prize { .. } => PlantType::PrizeFlower,
        }
    }

    /// Bloom colour, if the variant has one.
    pub fn color(&self) -> Option<&str> {
        match &self.kind {
            PlantKind::Plain => None,
            PlantKind::Flowering { color } | PlantKind::Prize { color, .. } => Some(color),
        }
    }

    /// Prize points, for prize flowers only.
    pub fn prize_points(&self) -> Option<u32> {
        match self.kind {
            PlantKind::Prize { prize_points, .. } => Some(prize_points),
            _ => None,
        }
    }

    /// Score contribution. Age never affects it.
    pub fn score(&self) -> u64 {
        self.plant_type().base_score() + u64::from(self.prize_points().unwrap_or(0))
    }

    /// Replace the age. Negative values are reported and leave the plant unchanged.
    pub fn set_age(&mut self, age: i64) -> GardenResult<()> {
        match non_negative_age(age) {
            Ok(age) => {
                info!(plant = %self.name, "age updated to {age} days");
                self.age = age;
                Ok(())
            }
            Err(err) => {
                warn!(plant = %self.name, "{err}");
                Err(err)
            }
        }
    }

    /// Advance the age by `days`.
    ///
    /// Negative deltas and results that do not fit the age counter are
    /// reported and leave the plant unchanged.
    pub fn grow(&mut self, days: i64) -> GardenResult<()> {
        match self.grown_age(days) {
            Ok(age) => {
                self.age = age;
                info!(plant = %self.name, days, "{} grew {days} day(s)", self.name);
                Ok(())
            }
            Err(err) => {
                warn!(plant = %self.name, "{err}");
                Err(err)
            }
        }
    }

    /// Age the plant would have after growing `days`, without applying it.
    pub(crate) fn grown_age(&self, days: i64) -> GardenResult<u64> {
        let delta = u64::try_from(days).map_err(|_| GardenError::NegativeDays { days })?;
        self.age
            .checked_add(delta)
            .ok_or_else(|| GardenError::AgeOverflow {
                plant: self.name.clone(),
                days,
            })
    }

    /// Announce a bloom. Returns `false` for variants that cannot flower.
    pub fn bloom(&self) -> bool {
        match self.kind {
            PlantKind::Plain => false,
            PlantKind::Flowering { .. } | PlantKind::Prize { .. } => {
                info!(plant = %self.name, "{} is blooming beautifully!", self.name);
                true
            }
        }
    }
}

fn non_negative_age(age: i64) -> GardenResult<u64> {
    u64::try_from(age).map_err(|_| GardenError::NegativeAge { age })
}

/// Description of a plant to be built from a type tag plus attributes.
///
/// Used by the registry so callers can add plants without picking the
/// variant constructor themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantBlueprint {
    plant_type: PlantType,
    name: String,
    age: i64,
    color: Option<String>,
    prize_points: Option<u32>,
}

impl PlantBlueprint {
    pub fn new(plant_type: PlantType, name: impl Into<String>, age: i64) -> Self {
        Self {
            plant_type,
            name: name.into(),
            age,
            color: None,
            prize_points: None,
        }
    }

    /// Start a blueprint from a textual type tag such as `"PrizeFlower"`.
    ///
    /// An unknown tag is reported and returned as [`GardenError::UnknownPlantType`].
    pub fn from_tag(tag: &str, name: impl Into<String>, age: i64) -> GardenResult<Self> {
        let name = name.into();
        match tag.parse() {
            Ok(plant_type) => Ok(Self::new(plant_type, name, age)),
            Err(err) => {
                warn!(plant = %name, "{err}");
                Err(err)
            }
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn prize_points(mut self, prize_points: u32) -> Self {
        self.prize_points = Some(prize_points);
        self
    }

    pub fn plant_type(&self) -> PlantType {
        self.plant_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the plant, checking that the variant's attributes are present.
    ///
    /// Attributes the variant does not use are ignored.
    pub fn build(self) -> GardenResult<Plant> {
        let kind = match self.plant_type {
            PlantType::Plant => PlantKind::Plain,
            PlantType::FloweringPlant => PlantKind::Flowering {
                color: self.color.ok_or(GardenError::MissingAttribute {
                    plant_type: self.plant_type,
                    attribute: "color",
                })?,
            },
            PlantType::PrizeFlower => {
                let color = self.color.ok_or(GardenError::MissingAttribute {
                    plant_type: self.plant_type,
                    attribute: "color",
                })?;
                let prize_points = self.prize_points.ok_or(GardenError::MissingAttribute {
                    plant_type: self.plant_type,
                    attribute: "prize points",
                })?;
                PlantKind::Prize {
                    color,
                    prize_points,
                }
            }
        };
        Ok(Plant::with_kind(self.name, self.age, kind))
    }
}
