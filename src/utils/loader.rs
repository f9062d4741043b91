//! Reads the summit dataset from a CSV file.
//!
//! The file needs a header row with at least the `Name`, `Latitude`,
//! `Longitude` and `Metres` columns. Any other columns are ignored.
//! Rows missing one of those four values are dropped, as are rows with
//! a negative height.

use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::types::summit::Summit;

/// One raw row of the dataset. Every field is optional so that
/// incomplete rows can be skipped instead of failing the load.
#[derive(Debug, Deserialize)]
struct SummitRow {
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Latitude")]
    latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    longitude: Option<f64>,
    #[serde(rename = "Metres")]
    metres: Option<f64>,
}

impl SummitRow {
    fn into_summit(self) -> Option<Summit> {
        let name = self.name.filter(|name| !name.trim().is_empty())?;
        Some(Summit::new(name, self.latitude?, self.longitude?, self.metres?))
    }
}

/// Loads summits from any CSV source, keeping row order.
///
/// # Returns
/// The complete rows as [`Summit`]s. A row with an empty required
/// field, a non-numeric coordinate/height or a negative height is
/// skipped. An error is returned only when the CSV itself cannot be
/// read, e.g. a missing header row or an I/O failure.
pub fn load_summits<R: Read>(reader: R) -> Result<Vec<Summit>, String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| format!("Could not read dataset header: {}", e))?
        .clone();
    for required in ["Name", "Latitude", "Longitude", "Metres"] {
        if !headers.iter().any(|h| h == required) {
            return Err(format!("Dataset is missing the {} column", required));
        }
    }

    let mut summits = Vec::new();
    let mut skipped = 0;
    for (index, result) in rdr.deserialize::<SummitRow>().enumerate() {
        match result {
            Ok(row) => match row.into_summit() {
                Some(summit) if summit.height < 0.0 => {
                    warn!(
                        "Skipping row {} ({}): negative height {}",
                        index + 1,
                        summit.name,
                        summit.height
                    );
                    skipped += 1;
                }
                Some(summit) => summits.push(summit),
                None => {
                    debug!("Skipping incomplete row {}", index + 1);
                    skipped += 1;
                }
            },
            Err(e) if is_row_error(&e) => {
                warn!("Skipping unparsable row {}: {}", index + 1, e);
                skipped += 1;
            }
            Err(e) => return Err(format!("Could not read dataset: {}", e)),
        }
    }

    info!("Loaded {} summits, skipped {} rows", summits.len(), skipped);
    Ok(summits)
}

/// Loads summits from a CSV file on disk.
pub fn load_summits_from_path(path: impl AsRef<Path>) -> Result<Vec<Summit>, String> {
    let path = path.as_ref();
    info!("Loading summits from {}", path.display());
    let file = File::open(path)
        .map_err(|e| format!("Could not open dataset {}: {}", path.display(), e))?;
    load_summits(file)
}

/// Errors confined to a single row, as opposed to the whole file.
fn is_row_error(error: &csv::Error) -> bool {
    matches!(
        error.kind(),
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}

#[cfg(test)]
mod loader_tests {
    use super::*;

    const SAMPLE: &str = "\
Number,Name,Metres,Feet,Latitude,Longitude
1,Ben Nevis,1345,4413,56.796891,-5.003675
2,Ben Macdui,1309,4295,57.070368,-3.669099
3,,1296,4252,57.078,-3.728
4,Carn Eige,1183,3881,,-5.118
5,Scafell Pike,978,3209,54.454222,-3.211528
6,Braeriach,,4252,57.078,-3.728
";

    #[test]
    fn test_load_drops_incomplete_rows() {
        let summits = load_summits(SAMPLE.as_bytes()).unwrap();
        let names: Vec<&str> = summits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ben Nevis", "Ben Macdui", "Scafell Pike"]);

        let ben = &summits[0];
        assert_eq!(ben.height, 1345.0);
        assert_eq!(ben.location.latitude, 56.796891);
        assert_eq!(ben.location.longitude, -5.003675);
    }

    #[test]
    fn test_load_skips_non_numeric_values() {
        let data = "Name,Latitude,Longitude,Metres\nGood,1.0,2.0,3.0\nBad,north,2.0,3.0\n";
        let summits = load_summits(data.as_bytes()).unwrap();
        assert_eq!(summits.len(), 1);
        assert_eq!(summits[0].name, "Good");
    }

    #[test]
    fn test_load_skips_negative_height() {
        let data = "Name,Latitude,Longitude,Metres\nSink,1.0,2.0,-4.5\nSea Stack,1.5,2.5,0\n";
        let summits = load_summits(data.as_bytes()).unwrap();
        assert_eq!(summits.len(), 1);
        assert_eq!(summits[0].name, "Sea Stack");
        assert_eq!(summits[0].height, 0.0);
    }

    #[test]
    fn test_load_missing_column() {
        let data = "Name,Latitude,Longitude\nBen Nevis,56.79,-5.00\n";
        let err = load_summits(data.as_bytes()).unwrap_err();
        assert!(err.contains("Metres"), "{}", err);
    }

    #[test]
    fn test_load_header_only() {
        let data = "Name,Latitude,Longitude,Metres\n";
        assert!(load_summits(data.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_summits_from_path("/definitely/not/here.csv").unwrap_err();
        assert!(err.contains("Could not open dataset"));
    }
}
