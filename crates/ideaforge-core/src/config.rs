use std::env::VarError;
use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Read [`AppConfig`] from the environment, loading a `.env` file first if
/// one is present.
///
/// # Errors
///
/// Returns `ConfigError` when a numeric variable does not parse or is out of
/// range.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but reads only the current process
/// environment; no `.env` file is consulted.
///
/// # Errors
///
/// See [`load_app_config`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn numeric_or<T, L>(lookup: &L, var: &str, fallback: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    L: Fn(&str) -> Result<String, VarError>,
{
    let raw = lookup(var).unwrap_or_else(|_| fallback.to_owned());
    raw.trim()
        .parse::<T>()
        .map_err(|err| ConfigError::InvalidEnvVar {
            var: var.to_owned(),
            reason: err.to_string(),
        })
}

// Takes the lookup as a closure so tests never touch the real environment.
fn build_app_config<L>(lookup: L) -> Result<AppConfig, ConfigError>
where
    L: Fn(&str) -> Result<String, VarError>,
{
    let optional = |var: &str| lookup(var).ok().filter(|value| !value.trim().is_empty());
    let string_or =
        |var: &str, fallback: &str| lookup(var).unwrap_or_else(|_| fallback.to_owned());

    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_model = string_or("IDEAFORGE_GEMINI_MODEL", "gemini-2.0-flash");
    let gemini_base_url = string_or(
        "IDEAFORGE_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let provider_timeout_secs = numeric_or(&lookup, "IDEAFORGE_PROVIDER_TIMEOUT_SECS", "60")?;

    let trend_source_timeout_secs =
        numeric_or(&lookup, "IDEAFORGE_TREND_SOURCE_TIMEOUT_SECS", "15")?;
    let trend_max_concurrent: usize =
        numeric_or(&lookup, "IDEAFORGE_TREND_MAX_CONCURRENT", "4")?;
    if trend_max_concurrent == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "IDEAFORGE_TREND_MAX_CONCURRENT".to_owned(),
            reason: "must be at least 1".to_owned(),
        });
    }
    let max_trends = numeric_or(&lookup, "IDEAFORGE_MAX_TRENDS", "50")?;
    let user_agent = string_or("IDEAFORGE_USER_AGENT", "ideaforge/0.1 (trend-collector)");

    let content_path = optional("IDEAFORGE_CONTENT_PATH").map(PathBuf::from);
    let log_level = string_or("IDEAFORGE_LOG_LEVEL", "info");

    Ok(AppConfig {
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        provider_timeout_secs,
        trend_source_timeout_secs,
        trend_max_concurrent,
        max_trends,
        user_agent,
        content_path,
        log_level,
    })
}
