use chrono::{DateTime, Utc};

use fuelnear_core::RawStationRecord;

/// One fetched snapshot of the nationwide station listing.
#[derive(Debug, Clone)]
pub struct StationBatch {
    /// When this process received the batch.
    pub fetched_at: DateTime<Utc>,
    /// The feed's own `Fecha` stamp, passed through verbatim when present.
    pub published_at: Option<String>,
    /// Station records in feed order.
    pub records: Vec<RawStationRecord>,
}
