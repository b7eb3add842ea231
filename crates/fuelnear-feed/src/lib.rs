pub mod client;
pub mod error;
pub mod types;

pub use client::CarburantesClient;
pub use error::FeedError;
pub use types::StationBatch;
