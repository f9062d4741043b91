//! Stores the process-wide summit dataset
//!
//! The dataset is set exactly once, at startup, and is read-only from
//! then on. Queries borrow it as a `&'static` slice, so any number of
//! them can run at the same time without locking.

use std::path::Path;

use once_cell::sync::OnceCell;

use crate::algorithms::proximity::{find_nearest, NearbyLocationQuery};
use crate::types::{hill::Hill, summit::Summit};
use crate::utils::loader::load_summits_from_path;

/// List of summits answering proximity queries
pub static SUMMITS: OnceCell<Vec<Summit>> = OnceCell::new();

/// Initialize the dataset with the given summits
pub fn init_dataset(summits: Vec<Summit>) -> Result<(), String> {
    info!("Initializing dataset with {} summits", summits.len());
    SUMMITS.set(summits).map_err(|_| {
        error!("Dataset already initialized");
        "Dataset already initialized. Try to use the dataset instead of initializing it."
            .to_string()
    })
}

/// Load the dataset from a CSV file and initialize it
///
/// # Returns
/// The number of summits loaded.
pub fn init_dataset_from_path(path: impl AsRef<Path>) -> Result<usize, String> {
    let summits = load_summits_from_path(path)?;
    let count = summits.len();
    init_dataset(summits)?;
    Ok(count)
}

/// Checks if dataset is initialized
pub fn is_dataset_initialized() -> bool {
    SUMMITS.get().is_some()
}

/// Gets the dataset
pub fn get_dataset() -> Result<&'static [Summit], String> {
    SUMMITS
        .get()
        .map(|summits| summits.as_slice())
        .ok_or_else(|| "Dataset not initialized. Try to initialize it first.".to_string())
}

/// Returns the summits near the given location, closest first
pub fn get_nearest_hills(query: NearbyLocationQuery) -> Result<Vec<Hill>, String> {
    debug!("query: {:?}", query);
    let summits = get_dataset().map_err(|e| {
        error!("{}", e);
        e
    })?;
    let hills = find_nearest(summits, &query);
    debug!("Found {} hills within {} miles", hills.len(), query.radius);
    Ok(hills)
}

/// The dataset can only be set once per process, so everything that
/// touches it lives in a single test.
#[cfg(test)]
mod dataset_state_tests {
    use super::*;

    #[test]
    fn test_dataset_lifecycle() {
        let query = NearbyLocationQuery::new(56.7969, -5.0036, None);

        assert!(!is_dataset_initialized());
        assert!(get_dataset().is_err());
        assert!(get_nearest_hills(query).is_err());

        let summits = vec![
            Summit::new("Ben Nevis", 56.7969, -5.0036, 1345.0),
            Summit::new("Scafell Pike", 54.4542, -3.2115, 978.0),
        ];
        init_dataset(summits).unwrap();
        assert!(is_dataset_initialized());
        assert_eq!(get_dataset().unwrap().len(), 2);

        let hills = get_nearest_hills(query).unwrap();
        assert_eq!(hills.len(), 1);
        assert_eq!(hills[0].name, "Ben Nevis");

        // second initialization is refused and the first dataset stays
        assert!(init_dataset(vec![]).is_err());
        assert_eq!(get_dataset().unwrap().len(), 2);

        let threads: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || get_nearest_hills(query).unwrap().len()))
            .collect();
        for thread in threads {
            assert_eq!(thread.join().unwrap(), 1);
        }
    }
}
