//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` is supplied per query and is never stored on its own.
//! Summits carry one each, see [`Summit`](`super::summit::Summit`).

use crate::utils::haversine;

/// A [`Location`] is a point on the earth's surface in decimal degrees.
///
/// Ranges are not enforced. Latitudes beyond ±90 or longitudes beyond
/// ±180 go straight into the trigonometry and produce whatever it
/// produces.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Location {
    /// The latitude of the location.
    pub latitude: f64,

    /// The longitude of the location.
    pub longitude: f64,
}

impl Location {
    /// Creates a location from a latitude and a longitude.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Location {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in miles to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine::distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Initial compass bearing in degrees from this location to `other`.
    pub fn bearing_to(&self, other: &Location) -> f64 {
        haversine::bearing(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}
