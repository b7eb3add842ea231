//! Distance ranking: annotate, filter, order, truncate.

use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::distance::haversine_km;
use crate::normalize::normalize_batch;
use crate::station::{RankedStation, RankingResult, RawStationRecord, Station};

/// Number of stations returned when the caller does not ask otherwise.
pub const DEFAULT_TOP_K: usize = 6;

/// Tuning for one ranking run.
#[derive(Debug, Clone)]
pub struct RankOptions {
    /// Discard stations farther than this many kilometers from the origin.
    /// `None` ranks the whole set.
    pub radius_km: Option<f64>,
    /// Maximum number of stations in the result. Zero yields an empty
    /// result, not an error.
    pub top_k: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            radius_km: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Terminal failures of a ranking run.
#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// Every record in the batch was rejected during normalization.
    #[error("no station record survived normalization")]
    NoValidRecords,

    /// The radius bound excluded every normalized station.
    #[error("no station within {radius_km} km")]
    NoRecordsInRange { radius_km: f64 },
}

/// Ranks `stations` by distance from `origin`: optional radius filter, then
/// a stable ascending sort.
///
/// Every normalized station has a finite coordinate, so the `total_cmp`
/// comparator never sees NaN; `Vec::sort_by` is stable, which keeps ties in
/// batch order and makes repeated runs byte-identical.
#[must_use]
pub fn select(
    stations: Vec<Station>,
    origin: Coordinate,
    radius_km: Option<f64>,
) -> Vec<RankedStation> {
    let mut ranked: Vec<RankedStation> = stations
        .into_iter()
        .map(|station| {
            let distance_km = haversine_km(origin, station.coordinate);
            RankedStation {
                station,
                distance_km,
            }
        })
        .filter(|ranked| radius_km.is_none_or(|radius| ranked.distance_km <= radius))
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked
}

/// Truncates an already-sorted ranking to its first `k` entries.
#[must_use]
pub fn top_k(mut ranked: Vec<RankedStation>, k: usize) -> RankingResult {
    ranked.truncate(k);
    RankingResult { stations: ranked }
}

/// Runs the ranking pipeline over one fetched batch: normalize every
/// record, rank the survivors against `origin`, truncate to
/// [`RankOptions::top_k`].
///
/// Per-record rejections are dropped and logged at debug; only an empty
/// outcome is an error.
///
/// # Errors
///
/// - [`RankError::NoValidRecords`] when the batch is empty or every record
///   was rejected during normalization.
/// - [`RankError::NoRecordsInRange`] when the configured radius bound
///   excluded every station.
pub fn rank_nearest(
    records: Vec<RawStationRecord>,
    origin: Coordinate,
    options: &RankOptions,
) -> Result<RankingResult, RankError> {
    let total = records.len();
    let (stations, rejects) = normalize_batch(records);
    if !rejects.is_empty() {
        tracing::info!(
            rejected = rejects.len(),
            total,
            "dropped station records during normalization"
        );
    }
    if stations.is_empty() {
        return Err(RankError::NoValidRecords);
    }

    let ranked = select(stations, origin, options.radius_km);
    if let Some(radius_km) = options.radius_km {
        if ranked.is_empty() {
            return Err(RankError::NoRecordsInRange { radius_km });
        }
    }

    Ok(top_k(ranked, options.top_k))
}
