//! Hill Finder Library.
//! Finds named hill summits within a radius of a coordinate, with the
//! distance and compass bearing to each.

#[macro_use]
extern crate log;

/// Types used throughout the library.
pub mod types {
    pub mod hill;
    pub mod location;
    pub mod summit;
}

/// Search over the summit dataset.
pub mod algorithms {
    pub mod compass;
    pub mod proximity;
}

/// Geo math, dataset loading and shared state.
pub mod utils {
    pub mod dataset_state;
    pub mod generator;
    pub mod haversine;
    pub mod loader;
}

pub mod api;

pub use types::{hill, location, summit};
pub use utils::{dataset_state, haversine};
