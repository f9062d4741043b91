//! Nearest-within-radius search over a summit dataset.
//!
//! The dataset is scanned linearly. It holds a few thousand rows, so a
//! full scan stays well under a millisecond; a grid or k-d tree would
//! slot in here if that ever changes.

use ordered_float::OrderedFloat;

use crate::types::{hill::Hill, location::Location, summit::Summit};

/// Radius in miles used when a query does not give one.
pub const DEFAULT_FURTHEST_MILES: f64 = 25.0;

/// Query struct for finding summits near a location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearbyLocationQuery {
    /// Where the query is made from.
    pub location: Location,

    /// Search radius in miles, inclusive.
    pub radius: f64,
}

impl NearbyLocationQuery {
    /// Builds a query, falling back to [`DEFAULT_FURTHEST_MILES`] when
    /// no radius is given.
    pub fn new(latitude: f64, longitude: f64, radius: Option<f64>) -> Self {
        NearbyLocationQuery {
            location: Location::new(latitude, longitude),
            radius: radius.unwrap_or(DEFAULT_FURTHEST_MILES),
        }
    }
}

/// Returns every summit within `query.radius` miles of
/// `query.location`, closest first.
///
/// # Arguments
/// * `summits` - The dataset to scan.
/// * `query` - Query point and radius.
///
/// # Returns
/// A vector of [`Hill`]s sorted by ascending distance. Summits at the
/// same distance keep their dataset order. An empty vector means
/// nothing was in range; it is not an error.
///
/// # Time Complexity
/// *O*(*n* + *k* log *k*) for *n* summits and *k* matches.
pub fn find_nearest(summits: &[Summit], query: &NearbyLocationQuery) -> Vec<Hill> {
    let origin = &query.location;
    let mut hills: Vec<Hill> = summits
        .iter()
        .filter_map(|summit| {
            let distance = origin.distance_to(&summit.location);
            if distance <= query.radius {
                // bearing only for summits that made the cut
                Some(Hill {
                    name: summit.name.clone(),
                    distance,
                    bearing: origin.bearing_to(&summit.location),
                    height: summit.height,
                })
            } else {
                None
            }
        })
        .collect();

    // sort_by_key is stable, ties stay in dataset order
    hills.sort_by_key(|hill| OrderedFloat(hill.distance));
    hills
}

/// Convenience wrapper around [`find_nearest`] taking the query as
/// plain numbers.
pub fn nearest(
    summits: &[Summit],
    latitude: f64,
    longitude: f64,
    furthest: Option<f64>,
) -> Vec<Hill> {
    find_nearest(
        summits,
        &NearbyLocationQuery::new(latitude, longitude, furthest),
    )
}
