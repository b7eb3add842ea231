//! Station records as they arrive from the feed and after normalization.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::products::FuelProduct;

/// Feed field holding the station latitude, a comma-decimal string.
pub const FIELD_LATITUDE: &str = "Latitud";
/// Feed field holding the station longitude, a comma-decimal string.
pub const FIELD_LONGITUDE: &str = "Longitud (WGS84)";
/// Station display name, e.g. `"REPSOL"`.
pub const FIELD_LABEL: &str = "Rótulo";
/// Street address.
pub const FIELD_ADDRESS: &str = "Dirección";
/// Municipality the station sits in.
pub const FIELD_MUNICIPALITY: &str = "Municipio";
/// Province the station sits in.
pub const FIELD_PROVINCE: &str = "Provincia";
/// Opening-hours text, e.g. `"L-D: 24H"`.
pub const FIELD_SCHEDULE: &str = "Horario";

/// A station record exactly as the feed delivered it: an opaque mapping of
/// field name to JSON value.
///
/// The feed sends every field as a string; [`RawStationRecord::field`]
/// enforces that by returning `None` for absent and non-string values
/// alike. Fields the pipeline never examines (postal code, sale type,
/// per-product prices, ...) ride along untouched and survive into the
/// output serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawStationRecord(serde_json::Map<String, serde_json::Value>);

impl RawStationRecord {
    /// Returns the named field when it is present and a JSON string.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(serde_json::Value::as_str)
    }

    /// Returns the named field trimmed, treating whitespace-only values as
    /// absent.
    #[must_use]
    pub fn display_field(&self, name: &str) -> Option<String> {
        self.field(name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for RawStationRecord {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(fields)
    }
}

/// A feed record that passed normalization: the raw record plus its parsed
/// coordinate, with the common display fields lifted out.
///
/// Owned by one ranking run and discarded with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub label: Option<String>,
    pub address: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub schedule: Option<String>,
    pub coordinate: Coordinate,
    /// The record as received, for fields the pipeline does not examine.
    pub raw: RawStationRecord,
}

impl Station {
    /// Price column for `product`, formatted as the feed sent it
    /// (comma-decimal string, e.g. `"1,479"`). Empty columns read as absent.
    #[must_use]
    pub fn price_for(&self, product: FuelProduct) -> Option<String> {
        self.raw.display_field(product.price_field())
    }
}

/// A [`Station`] annotated with its distance from the run's origin.
///
/// The distance is derived against one specific origin and never reused
/// across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    #[serde(flatten)]
    pub station: Station,
    pub distance_km: f64,
}

/// The nearest stations for one run: ascending by distance, ties in batch
/// order, at most K entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankingResult {
    pub stations: Vec<RankedStation>,
}

impl RankingResult {
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedStation> {
        self.stations.iter()
    }
}

impl<'a> IntoIterator for &'a RankingResult {
    type Item = &'a RankedStation;
    type IntoIter = std::slice::Iter<'a, RankedStation>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl IntoIterator for RankingResult {
    type Item = RankedStation;
    type IntoIter = std::vec::IntoIter<RankedStation>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.into_iter()
    }
}
