//! Definition of the [`Hill`] type, one item of a proximity query
//! result.

use serde::{Deserialize, Serialize};

/// A summit as seen from a query point.
///
/// Lives for a single request and is never stored.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Hill {
    /// Name of the summit.
    pub name: String,

    /// Great-circle distance from the query point in miles.
    pub distance: f64,

    /// Initial bearing from the query point in degrees, `[0, 360)`.
    pub bearing: f64,

    /// Height of the summit in metres.
    pub height: f64,
}

#[cfg(test)]
mod hill_tests {
    use super::Hill;

    #[test]
    fn test_serialized_field_names() {
        let hill = Hill {
            name: "Ben Nevis".to_string(),
            distance: 1.5,
            bearing: 90.0,
            height: 1345.0,
        };
        let json = serde_json::to_value(&hill).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ben Nevis",
                "distance": 1.5,
                "bearing": 90.0,
                "height": 1345.0
            })
        );
    }
}
