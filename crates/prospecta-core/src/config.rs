use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment, OdooConfig};
use crate::ConfigError;

pub(crate) const DEFAULT_STORE_PATH: &str = "analises_empresas.csv";
pub(crate) const DEFAULT_FETCH_TIMEOUT_SECS: &str = "15";
pub(crate) const DEFAULT_FETCH_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("PROSPECTA_ENV", "development"));
    let log_level = or_default("PROSPECTA_LOG_LEVEL", "info");
    let store_path = PathBuf::from(or_default("PROSPECTA_STORE_PATH", DEFAULT_STORE_PATH));

    let raw_timeout = or_default("PROSPECTA_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS);
    let fetch_timeout_secs = match raw_timeout.parse::<u64>() {
        Ok(0) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "PROSPECTA_FETCH_TIMEOUT_SECS".to_string(),
                reason: "timeout must be greater than zero".to_string(),
            })
        }
        Ok(secs) => secs,
        Err(e) => {
            return Err(ConfigError::InvalidEnvVar {
                var: "PROSPECTA_FETCH_TIMEOUT_SECS".to_string(),
                reason: e.to_string(),
            })
        }
    };

    let fetch_user_agent = or_default("PROSPECTA_FETCH_USER_AGENT", DEFAULT_FETCH_USER_AGENT);

    // The CRM block is all-or-nothing: ODOO_URL switches it on.
    let odoo = match lookup("ODOO_URL").ok().filter(|v| !v.trim().is_empty()) {
        Some(url) => Some(OdooConfig {
            url,
            db: require("ODOO_DB")?,
            user: require("ODOO_USER")?,
            password: require("ODOO_PASSWORD")?,
        }),
        None => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        store_path,
        fetch_timeout_secs,
        fetch_user_agent,
        odoo,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
