//! Nearest-station handler for the CLI.
//!
//! Orchestrates one ranking run: resolve the caller's location, fetch the
//! raw batch, rank, and print. A location failure short-circuits before any
//! fetch happens; a superseded run's result is discarded unpublished.

use anyhow::Context;
use clap::Args;

use fuelnear_core::{
    rank_nearest, AppConfig, Coordinate, FuelProduct, RankOptions, RankSession, RankingResult,
};
use fuelnear_feed::CarburantesClient;

#[derive(Debug, Args)]
pub(crate) struct NearestArgs {
    /// Caller latitude in decimal degrees.
    #[arg(long, env = "FUELNEAR_LAT", allow_hyphen_values = true)]
    pub(crate) lat: f64,

    /// Caller longitude in decimal degrees.
    #[arg(long, env = "FUELNEAR_LON", allow_hyphen_values = true)]
    pub(crate) lon: f64,

    /// Only show stations within this many kilometers.
    #[arg(long, value_name = "KM")]
    pub(crate) radius_km: Option<f64>,

    /// How many stations to show.
    #[arg(long, short = 'k', value_name = "N")]
    pub(crate) count: Option<usize>,

    /// Fuel product whose price to display.
    #[arg(long, default_value_t = FuelProduct::default())]
    pub(crate) fuel: FuelProduct,

    /// Emit the ranking as JSON instead of a table.
    #[arg(long)]
    pub(crate) json: bool,
}

/// Rank the nearest stations to the caller's location and print them.
///
/// # Errors
///
/// Every terminal pipeline failure surfaces as a single `anyhow` message:
/// an unusable location, a failed or malformed fetch, a batch with no valid
/// records, or a radius bound that excluded everything.
pub(crate) async fn run_nearest(config: &AppConfig, args: &NearestArgs) -> anyhow::Result<()> {
    let origin = Coordinate::new(args.lat, args.lon)
        .context("could not determine caller location")?;

    let options = run_options(args, config);
    let client = CarburantesClient::new(config)?;

    // Newest begin() on a session wins; a stale run drops its result at
    // publish time instead of overwriting a fresher one.
    let session = RankSession::new();
    let token = session.begin();

    let batch = client
        .fetch_stations()
        .await
        .context("could not fetch the station price feed")?;
    tracing::info!(
        records = batch.records.len(),
        published_at = batch.published_at.as_deref().unwrap_or("unknown"),
        "fetched station batch"
    );

    let result = rank_nearest(batch.records, origin, &options)?;
    let Some(result) = token.publish(result) else {
        anyhow::bail!("ranking run superseded by a newer location");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&result, args.fuel);
    }

    Ok(())
}

/// Flags override configuration; configuration fills the gaps.
fn run_options(args: &NearestArgs, config: &AppConfig) -> RankOptions {
    RankOptions {
        radius_km: args.radius_km.or(config.radius_km),
        top_k: args.count.unwrap_or(config.top_k),
    }
}

fn print_table(result: &RankingResult, fuel: FuelProduct) {
    println!("Nearest stations ({} shown):", result.len());
    for ranked in result {
        let station = &ranked.station;
        let label = station.label.as_deref().unwrap_or("(unnamed)");
        let price = station
            .price_for(fuel)
            .map_or_else(|| "-".to_owned(), |p| format!("{p} €/L"));
        let municipality = station.municipality.as_deref().unwrap_or("?");
        println!(
            "  {label:<24} {price:>12}  {municipality:<20} {:>7.1} km",
            ranked.distance_km
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(radius_km: Option<f64>, count: Option<usize>) -> NearestArgs {
        NearestArgs {
            lat: 40.0,
            lon: -3.0,
            radius_km,
            count,
            fuel: FuelProduct::default(),
            json: false,
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            feed_base_url: "http://localhost".to_owned(),
            request_timeout_secs: 30,
            user_agent: "test".to_owned(),
            log_level: "info".to_owned(),
            top_k: 6,
            radius_km: Some(50.0),
        }
    }

    #[test]
    fn flags_override_configuration() {
        let options = run_options(&args(Some(10.0), Some(2)), &config());
        assert_eq!(options.radius_km, Some(10.0));
        assert_eq!(options.top_k, 2);
    }

    #[test]
    fn configuration_fills_unset_flags() {
        let options = run_options(&args(None, None), &config());
        assert_eq!(options.radius_km, Some(50.0));
        assert_eq!(options.top_k, 6);
    }
}
