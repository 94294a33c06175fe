//! Owner-keyed garden registry.

/// Single-threaded registry of gardens.
pub mod manager;
/// Lock-guarded handle for hosts that share the registry across threads.
pub mod shared;

pub use manager::GardenManager;
pub use shared::SharedGardenManager;
