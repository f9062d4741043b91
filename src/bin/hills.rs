use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use hills::algorithms::compass::closest_per_bearing_degree;
use hills::algorithms::proximity::{NearbyLocationQuery, DEFAULT_FURTHEST_MILES};
use hills::api::NearestResponse;
use hills::dataset_state::{get_nearest_hills, init_dataset_from_path};

#[derive(Parser, Debug)]
#[command(name = "hills")]
#[command(about = "Load a CSV of hill summits and list those within a radius of a coordinate, closest first.", long_about = None)]
struct Cli {
    /// Path to the dataset .csv file (Name, Latitude, Longitude, Metres columns)
    #[arg(short, long)]
    dataset: String,

    /// Latitude of the query point in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    latitude: f64,

    /// Longitude of the query point in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    longitude: f64,

    /// Search radius in miles
    #[arg(short, long, default_value_t = DEFAULT_FURTHEST_MILES, allow_negative_numbers = true)]
    furthest: f64,

    /// Keep only the closest hill for each whole degree of bearing
    #[arg(long)]
    closest_per_degree: bool,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let count = init_dataset_from_path(&cli.dataset)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Failed to load dataset from {}", cli.dataset))?;
    info!("Dataset ready with {} summits", count);

    let query = NearbyLocationQuery::new(cli.latitude, cli.longitude, Some(cli.furthest));
    let mut results = get_nearest_hills(query).map_err(|e| anyhow!(e))?;
    if cli.closest_per_degree {
        results = closest_per_bearing_degree(&results);
    }
    info!("{} hills within {} miles", results.len(), cli.furthest);

    let response = NearestResponse { results };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}
