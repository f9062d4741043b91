//! Request boundary for the nearest-hills query.
//!
//! Parses the `latitude`, `longitude` and `furthest` query parameters,
//! runs the query and shapes the `{ "results": [...] }` response. Any
//! HTTP layer can sit on top of [`handle_nearest`]; parameter checking
//! happens here so the core never sees a half-formed query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithms::proximity::{find_nearest, NearbyLocationQuery};
use crate::types::{hill::Hill, summit::Summit};
use crate::utils::dataset_state::get_dataset;

/// Why a request could not be answered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// A required parameter was not supplied.
    #[error("missing required query parameter `{0}`")]
    MissingParameter(&'static str),
    /// A parameter was supplied but is not a finite number.
    #[error("query parameter `{name}` is not a finite number: {value:?}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The raw value received.
        value: String,
    },
    /// The dataset has not been loaded.
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestResponse {
    /// Matching hills, closest first.
    pub results: Vec<Hill>,
}

/// Parses a form-urlencoded query string into a query.
///
/// A leading `?` is tolerated. Unknown parameters are ignored, and a
/// repeated parameter takes its last value. `NaN` and infinities are
/// rejected for every parameter.
pub fn parse_nearest_query(query_string: &str) -> Result<NearbyLocationQuery, RequestError> {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

    let mut latitude = None;
    let mut longitude = None;
    let mut furthest = None;
    for (key, value) in url::form_urlencoded::parse(query_string.as_bytes()) {
        match key.as_ref() {
            "latitude" => latitude = Some(parse_number("latitude", &value)?),
            "longitude" => longitude = Some(parse_number("longitude", &value)?),
            "furthest" => furthest = Some(parse_number("furthest", &value)?),
            other => debug!("Ignoring unknown query parameter {}", other),
        }
    }

    Ok(NearbyLocationQuery::new(
        latitude.ok_or(RequestError::MissingParameter("latitude"))?,
        longitude.ok_or(RequestError::MissingParameter("longitude"))?,
        furthest,
    ))
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, RequestError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(RequestError::InvalidParameter {
            name,
            value: value.to_string(),
        }),
    }
}

/// Answers a query string against the given summits.
pub fn respond_nearest(
    summits: &[Summit],
    query_string: &str,
) -> Result<NearestResponse, RequestError> {
    let query = parse_nearest_query(query_string).map_err(|e| {
        warn!("Rejected request {:?}: {}", query_string, e);
        e
    })?;
    Ok(NearestResponse {
        results: find_nearest(summits, &query),
    })
}

/// Answers a query string against the process-wide dataset.
pub fn handle_nearest(query_string: &str) -> Result<NearestResponse, RequestError> {
    let summits = get_dataset().map_err(RequestError::Unavailable)?;
    respond_nearest(summits, query_string)
}
