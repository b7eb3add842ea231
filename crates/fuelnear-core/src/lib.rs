pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod distance;
pub mod normalize;
pub mod pipeline;
pub mod products;
pub mod rank;
pub mod station;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError, DEFAULT_FEED_BASE_URL};
pub use coordinate::{Coordinate, CoordinateError};
pub use distance::{haversine_km, EARTH_RADIUS_KM};
pub use normalize::{normalize_batch, normalize_station, RejectReason};
pub use pipeline::{RankSession, RunToken};
pub use products::FuelProduct;
pub use rank::{rank_nearest, RankError, RankOptions, DEFAULT_TOP_K};
pub use station::{
    RankedStation, RankingResult, RawStationRecord, Station, FIELD_ADDRESS, FIELD_LABEL,
    FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_MUNICIPALITY, FIELD_PROVINCE, FIELD_SCHEDULE,
};
