#![allow(missing_docs)]

//! Plant taxonomy and the garden container.

mod garden;
mod plant;

pub use garden::Garden;
pub use plant::{Plant, PlantBlueprint, PlantKind, PlantType};
