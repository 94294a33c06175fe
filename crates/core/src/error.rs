//! Error kinds reported by garden operations.

use thiserror::Error;

use crate::models::PlantType;

/// Recoverable failures raised by the taxonomy, gardens and the registry.
///
/// None of these are fatal: the operation that produced one has already
/// logged it and left state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    /// A plant age below zero was supplied.
    #[error("negative age {age} rejected")]
    NegativeAge {
        /// The rejected value.
        age: i64,
    },
    /// A growth delta below zero was supplied.
    #[error("negative growth of {days} day(s) rejected")]
    NegativeDays {
        /// The rejected value.
        days: i64,
    },
    /// Growing would push the age past what can be stored.
    #[error("growing {plant} by {days} day(s) would overflow its age")]
    AgeOverflow {
        /// Name of the plant that could not grow.
        plant: String,
        /// Requested delta.
        days: i64,
    },
    /// Recording the growth would overflow the garden's growth counter.
    #[error("recording {days} day(s) would overflow {owner}'s growth counter")]
    GrowthOverflow {
        /// Owner of the garden.
        owner: String,
        /// Requested delta.
        days: i64,
    },
    /// No garden is registered for the owner.
    #[error("no garden found for {owner}")]
    GardenNotFound {
        /// Owner that was looked up.
        owner: String,
    },
    /// The owner already has a registered garden.
    #[error("{owner} already owns a garden")]
    DuplicateOwner {
        /// Owner that collided.
        owner: String,
    },
    /// A type tag that names none of the plant variants.
    #[error("unknown plant type '{0}'")]
    UnknownPlantType(String),
    /// A blueprint lacks an attribute its plant type requires.
    #[error("{plant_type} requires a {attribute}")]
    MissingAttribute {
        /// Variant being built.
        plant_type: PlantType,
        /// Name of the missing attribute.
        attribute: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type GardenResult<T> = Result<T, GardenError>;
