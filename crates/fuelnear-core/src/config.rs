use thiserror::Error;

use crate::app_config::AppConfig;
use crate::rank::DEFAULT_TOP_K;

/// Production base URL of the Spanish fuel-price REST service.
pub const DEFAULT_FEED_BASE_URL: &str =
    "https://sedeaplicaciones.minetur.gob.es/ServiciosRESTCarburantes/PreciosCarburantes";

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value. Unset
/// variables fall back to defaults.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_string());

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Err(_) => Ok(default),
            Ok(raw) => raw.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    // Unset means unbounded; a set value must be a positive finite number.
    let radius_km = match lookup("FUELNEAR_RADIUS_KM") {
        Err(_) => None,
        Ok(raw) => {
            let parsed = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v > 0.0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    var: "FUELNEAR_RADIUS_KM".to_string(),
                    reason: format!("{raw:?} is not a positive number of kilometers"),
                })?;
            Some(parsed)
        }
    };

    Ok(AppConfig {
        feed_base_url: or_default("FUELNEAR_FEED_BASE_URL", DEFAULT_FEED_BASE_URL),
        request_timeout_secs: parse_u64("FUELNEAR_REQUEST_TIMEOUT_SECS", 30)?,
        user_agent: or_default("FUELNEAR_USER_AGENT", "fuelnear/0.1 (station-proximity)"),
        log_level: or_default("FUELNEAR_LOG_LEVEL", "info"),
        top_k: parse_usize("FUELNEAR_TOP_K", DEFAULT_TOP_K)?,
        radius_km,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();

        assert_eq!(cfg.feed_base_url, DEFAULT_FEED_BASE_URL);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "fuelnear/0.1 (station-proximity)");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.top_k, DEFAULT_TOP_K);
        assert!(cfg.radius_km.is_none());
    }

    #[test]
    fn set_variables_override_defaults() {
        let mut map = HashMap::new();
        map.insert("FUELNEAR_FEED_BASE_URL", "http://localhost:8080/feed");
        map.insert("FUELNEAR_REQUEST_TIMEOUT_SECS", "5");
        map.insert("FUELNEAR_TOP_K", "3");
        map.insert("FUELNEAR_RADIUS_KM", "25.5");

        let cfg = build_app_config(lookup_from_map(&map)).unwrap();

        assert_eq!(cfg.feed_base_url, "http://localhost:8080/feed");
        assert_eq!(cfg.request_timeout_secs, 5);
        assert_eq!(cfg.top_k, 3);
        assert_eq!(cfg.radius_km, Some(25.5));
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("FUELNEAR_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FUELNEAR_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn invalid_top_k_is_rejected() {
        let mut map = HashMap::new();
        map.insert("FUELNEAR_TOP_K", "-1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FUELNEAR_TOP_K"),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn zero_or_negative_radius_is_rejected() {
        for bad in ["0", "-4", "NaN", "lots"] {
            let mut map = HashMap::new();
            map.insert("FUELNEAR_RADIUS_KM", bad);
            let result = build_app_config(lookup_from_map(&map));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FUELNEAR_RADIUS_KM"),
                "value {bad:?} should be rejected, got: {result:?}"
            );
        }
    }
}
