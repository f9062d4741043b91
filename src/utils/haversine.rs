//! Great-circle math on a spherical earth.
//!
//! All inputs are decimal degrees. Nothing is validated: out-of-range
//! coordinates are fed to the formulas as-is.

/// Mean earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Great-circle distance in miles between two points, using the
/// haversine formula.
///
/// Returns `0.0` for identical points and `π * EARTH_RADIUS_MILES` for
/// antipodal ones.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // a can drift a hair above 1.0 near the antipode; clamp keeps NaN as NaN
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();
    c * EARTH_RADIUS_MILES
}

/// Initial compass bearing in degrees, in `[0, 360)`, from point 1 to
/// point 2. North is 0, east is 90.
///
/// When both points are the same the direction is undefined; this
/// returns `0.0` because `atan2(0, 0)` is zero.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let dlon = (lon2 - lon1).to_radians();

    let x = dlon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    normalize_degrees(x.atan2(y).to_degrees())
}

/// Folds an angle in degrees into `[0, 360)`.
pub(crate) fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = (degrees + 360.0) % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
