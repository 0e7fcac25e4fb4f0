use crate::app_config::{AppConfig, Environment, MapSettings};
use crate::ConfigError;

/// Highest zoom level offered by common slippy-map tile servers.
const MAX_ZOOM: f64 = 22.0;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        or_default(var, default)
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("RESTOMAP_ENV", "development"))?;
    let log_level = or_default("RESTOMAP_LOG_LEVEL", "info");

    let center_zoom = parse_f64("RESTOMAP_CENTER_ZOOM", "14")?;
    if !center_zoom.is_finite() || !(0.0..=MAX_ZOOM).contains(&center_zoom) {
        return Err(invalid(
            "RESTOMAP_CENTER_ZOOM",
            format!("zoom must be between 0 and {MAX_ZOOM}, got {center_zoom}"),
        ));
    }

    let fit_padding_px = parse_u32("RESTOMAP_FIT_PADDING_PX", "50")?;
    if fit_padding_px == 0 {
        return Err(invalid(
            "RESTOMAP_FIT_PADDING_PX",
            "padding must be greater than zero".to_string(),
        ));
    }

    let max_import_bytes = parse_usize("RESTOMAP_MAX_IMPORT_BYTES", "26214400")?;
    if max_import_bytes == 0 {
        return Err(invalid(
            "RESTOMAP_MAX_IMPORT_BYTES",
            "limit must be greater than zero".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        map: MapSettings {
            center_zoom,
            fit_padding_px,
        },
        max_import_bytes,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s.trim() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RESTOMAP_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
