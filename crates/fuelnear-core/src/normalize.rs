//! Normalization of raw feed records into validated [`Station`]s.
//!
//! Normalization is total: every record either becomes a [`Station`] or a
//! [`RejectReason`], never a panic. Rejections are recovered locally (the
//! record drops out of the pipeline and the run continues) but they are
//! returned to the caller so data-quality regressions in the feed stay
//! observable.

use thiserror::Error;

use crate::coordinate::{Coordinate, CoordinateError};
use crate::station::{
    RawStationRecord, Station, FIELD_ADDRESS, FIELD_LABEL, FIELD_LATITUDE, FIELD_LONGITUDE,
    FIELD_MUNICIPALITY, FIELD_PROVINCE, FIELD_SCHEDULE,
};

/// Why a raw record was rejected during normalization.
#[derive(Debug, Error)]
pub enum RejectReason {
    /// The coordinate field is absent, or present with a non-string value.
    #[error("coordinate field {field:?} is missing or not a string")]
    MissingCoordinate { field: &'static str },

    /// The coordinate field is present but blank.
    #[error("coordinate field {field:?} is empty")]
    EmptyCoordinate { field: &'static str },

    /// The coordinate field holds text that is not a finite number.
    #[error("coordinate field {field:?} value {value:?} does not parse as a number")]
    UnparseableCoordinate { field: &'static str, value: String },

    /// Both fields parsed but the pair is not a valid geographic position.
    #[error("coordinates out of range: {source}")]
    OutOfRange {
        #[from]
        source: CoordinateError,
    },
}

/// Normalizes one raw feed record.
///
/// Coordinate fields use a decimal comma (`"40,4168"`); the comma is
/// rewritten to a point before parsing. The rewrite is the feed's format
/// contract, not a tolerance; a value already using a point passes through
/// unchanged.
///
/// # Errors
///
/// Returns [`RejectReason`] when either coordinate field is absent, empty,
/// not a string, unparseable, non-finite, or out of geographic range.
pub fn normalize_station(raw: RawStationRecord) -> Result<Station, RejectReason> {
    let lat = parse_coordinate_field(&raw, FIELD_LATITUDE)?;
    let lon = parse_coordinate_field(&raw, FIELD_LONGITUDE)?;
    let coordinate = Coordinate::new(lat, lon)?;

    Ok(Station {
        label: raw.display_field(FIELD_LABEL),
        address: raw.display_field(FIELD_ADDRESS),
        municipality: raw.display_field(FIELD_MUNICIPALITY),
        province: raw.display_field(FIELD_PROVINCE),
        schedule: raw.display_field(FIELD_SCHEDULE),
        coordinate,
        raw,
    })
}

/// Normalizes a whole batch, dropping rejected records.
///
/// Returns the surviving stations in batch order together with the
/// rejections so the caller can count or log them. An empty input yields
/// two empty vectors.
#[must_use]
pub fn normalize_batch(records: Vec<RawStationRecord>) -> (Vec<Station>, Vec<RejectReason>) {
    let mut stations = Vec::with_capacity(records.len());
    let mut rejects = Vec::new();

    for record in records {
        match normalize_station(record) {
            Ok(station) => stations.push(station),
            Err(reason) => {
                tracing::debug!(%reason, "dropping station record");
                rejects.push(reason);
            }
        }
    }

    (stations, rejects)
}

fn parse_coordinate_field(
    raw: &RawStationRecord,
    field: &'static str,
) -> Result<f64, RejectReason> {
    let value = raw
        .field(field)
        .ok_or(RejectReason::MissingCoordinate { field })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RejectReason::EmptyCoordinate { field });
    }

    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RejectReason::UnparseableCoordinate {
            field,
            value: value.to_owned(),
        })
}
