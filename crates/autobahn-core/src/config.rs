use crate::app_config::{AppConfig, Environment, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::ConfigError;

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
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
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

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| raw.parse::<u64>().map_err(|e| invalid(var, e.to_string())))
            .transpose()
    };

    let parse_optional_usize = |var: &str| -> Result<Option<usize>, ConfigError> {
        lookup(var)
            .ok()
            .map(|raw| raw.parse::<usize>().map_err(|e| invalid(var, e.to_string())))
            .transpose()
    };

    let env = parse_environment(&or_default("AUTOBAHN_ENV", "development"))?;
    let base_url = or_default("AUTOBAHN_BASE_URL", DEFAULT_BASE_URL);
    if base_url.trim().is_empty() {
        return Err(invalid("AUTOBAHN_BASE_URL", "must not be empty".to_string()));
    }
    let log_level = or_default("AUTOBAHN_LOG_LEVEL", "info");
    let user_agent = or_default("AUTOBAHN_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_optional_u64("AUTOBAHN_REQUEST_TIMEOUT_SECS")?;

    let max_concurrent_roads = parse_optional_usize("AUTOBAHN_MAX_CONCURRENT_ROADS")?;
    if max_concurrent_roads == Some(0) {
        return Err(invalid(
            "AUTOBAHN_MAX_CONCURRENT_ROADS",
            "must be at least 1".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        base_url,
        log_level,
        user_agent,
        request_timeout_secs,
        max_concurrent_roads,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "AUTOBAHN_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
