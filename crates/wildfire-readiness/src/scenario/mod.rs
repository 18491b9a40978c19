//! ZIP-driven historical scenarios for demo mode.
//!
//! Everything here is a static approximation keyed off ZIP ranges; no live
//! weather or geospatial data is consulted.

pub mod estimator;
pub mod region;
pub mod router;
pub mod tiles;
pub mod zip;

pub use estimator::{coordinates, estimate, estimate_distance, ScenarioRecord, SCENARIO_SOURCE};
pub use region::{Coordinates, DistanceParams, Region, WeatherProfile, REGION_RULES};
pub use router::scenario_router;
pub use tiles::{demo_tiles, TileCatalog, TileMetadata};
pub use zip::{ScenarioError, ZipCode};
