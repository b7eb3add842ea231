/// Runtime configuration shared by the feed client and the CLI.
///
/// Loaded from environment variables by [`crate::config::load_app_config`];
/// every field has a default, and CLI flags override the loaded values.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the fuel-price REST service.
    pub feed_base_url: String,
    /// Whole-request timeout for feed calls.
    pub request_timeout_secs: u64,
    /// User agent sent with every feed request.
    pub user_agent: String,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_level: String,
    /// How many stations a run returns at most.
    pub top_k: usize,
    /// Optional relevance bound in kilometers; `None` ranks the whole set.
    pub radius_km: Option<f64>,
}
