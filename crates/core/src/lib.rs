#![warn(clippy::all, missing_docs)]

//! Core domain logic for the garden analytics tool.
//!
//! This crate hosts the plant taxonomy, the garden container, the
//! owner-keyed registry, and the read-only statistics layer used by the
//! demo binary and any future frontends.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use error::{GardenError, GardenResult};
pub use models::{Garden, Plant, PlantBlueprint, PlantKind, PlantType};
pub use registry::{GardenManager, SharedGardenManager};
pub use stats::{GardenStats, GardenSummary, NetworkReport, NetworkRow, PlantRow, ReportStyle};
