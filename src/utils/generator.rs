//! Generates random summits around a location.
//!
//! Handy for exercising queries against a dataset of realistic size
//! without shipping a data file.

use rand::Rng;

use crate::types::{location::Location, summit::Summit};
use crate::utils::haversine::EARTH_RADIUS_MILES;

/// Height of the tallest summit in the British Isles, in metres.
const MAX_HEIGHT_METRES: f64 = 1345.0;

/// Generates `capacity` summits scattered uniformly over a disc of
/// `radius_miles` around `location`.
///
/// Offsets use a flat-earth approximation, so points land *roughly*
/// within the radius; close to the poles the spread is distorted.
///
/// Summits are named `summit_0`, `summit_1`, ... in generation order.
pub fn generate_summits_near(location: &Location, radius_miles: f64, capacity: i32) -> Vec<Summit> {
    let mut rng = rand::thread_rng();
    let miles_per_degree = EARTH_RADIUS_MILES.to_radians();
    let lat_scale = location.latitude.to_radians().cos().abs().max(1e-6);

    (0..capacity.max(0))
        .map(|i| {
            let r = radius_miles * rng.gen::<f64>().sqrt();
            let theta = rng.gen_range(0.0..std::f64::consts::TAU);
            let latitude = location.latitude + r * theta.cos() / miles_per_degree;
            let longitude = location.longitude + r * theta.sin() / (miles_per_degree * lat_scale);
            Summit::new(
                format!("summit_{}", i),
                latitude,
                longitude,
                rng.gen_range(0.0..MAX_HEIGHT_METRES),
            )
        })
        .collect()
}

#[cfg(test)]
mod generator_tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let origin = Location::new(56.7969, -5.0036);
        assert_eq!(generate_summits_near(&origin, 10.0, 50).len(), 50);
        assert!(generate_summits_near(&origin, 10.0, 0).is_empty());
        assert!(generate_summits_near(&origin, 10.0, -3).is_empty());
    }

    #[test]
    fn test_roughly_within_radius() {
        let origin = Location::new(54.4542, -3.2115);
        for summit in generate_summits_near(&origin, 10.0, 200) {
            // flat-earth offsets, allow a little slack
            assert!(origin.distance_to(&summit.location) <= 10.5);
            assert!(summit.height >= 0.0 && summit.height < MAX_HEIGHT_METRES);
        }
    }
}
