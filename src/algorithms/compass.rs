//! Post-processing for compass-style displays of query results.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::types::hill::Hill;
use crate::utils::haversine::normalize_degrees;

/// Keeps only the closest hill for each whole degree of bearing.
///
/// Bearings are rounded half away from zero, so `359.6` lands in its
/// own `360` bucket rather than sharing `0`. When two hills in a bucket
/// are equally close, the one seen first wins.
///
/// # Returns
/// The surviving hills sorted by ascending distance.
pub fn closest_per_bearing_degree(hills: &[Hill]) -> Vec<Hill> {
    let mut closest: BTreeMap<i64, &Hill> = BTreeMap::new();
    for hill in hills {
        let degree = hill.bearing.round() as i64;
        closest
            .entry(degree)
            .and_modify(|current| {
                if hill.distance < current.distance {
                    *current = hill;
                }
            })
            .or_insert(hill);
    }

    let mut kept: Vec<Hill> = closest.into_values().cloned().collect();
    kept.sort_by_key(|hill| OrderedFloat(hill.distance));
    kept
}

/// Bearing of a target as seen from a device pointing at `heading`,
/// both in degrees. The result is in `[0, 360)`.
pub fn relative_bearing(bearing: f64, heading: f64) -> f64 {
    normalize_degrees(bearing - heading)
}
