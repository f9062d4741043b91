//! Struct definitions and implementations for [`Summit`].
//!
//! Summits are the atomic unit of the dataset. They are built once by
//! the [`loader`](`crate::utils::loader`) and never modified.

use super::location::Location;

/// A named hill summit with its elevation.
#[derive(Debug, PartialEq, Clone)]
pub struct Summit {
    /// The name of the hill, e.g. `Ben Nevis`.
    pub name: String,

    /// Denotes the geographical position of the summit.
    ///
    /// See also [`Location`].
    pub location: Location,

    /// Height above sea level in metres.
    pub height: f64,
}

impl Summit {
    /// Creates a new summit.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, height: f64) -> Self {
        Summit {
            name: name.into(),
            location: Location::new(latitude, longitude),
            height,
        }
    }
}
