use crate::app_config::{AnalysisSettings, AppConfig, Environment};
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
/// Every variable has a default, so an empty environment yields a usable
/// config with AI analysis disabled.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_score = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| invalid(var, e.to_string()))?;
        if !(0.0..=10.0).contains(&value) {
            return Err(invalid(var, format!("{value} is outside 0.0..=10.0")));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("SAASRADAR_ENV", "development"))?;
    let log_level = or_default("SAASRADAR_LOG_LEVEL", "info");
    let audiences_path = optional("SAASRADAR_AUDIENCES_PATH").map(PathBuf::from);
    let results_dir = PathBuf::from(or_default("SAASRADAR_RESULTS_DIR", "results"));

    let request_timeout_secs = parse_u64("SAASRADAR_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default(
        "SAASRADAR_USER_AGENT",
        "saasradar/0.1 (opportunity-research)",
    );
    let max_retries = parse_u32("SAASRADAR_MAX_RETRIES", "3")?;
    let retry_backoff_base_secs = parse_u64("SAASRADAR_RETRY_BACKOFF_BASE_SECS", "2")?;
    let inter_request_delay_ms = parse_u64("SAASRADAR_INTER_REQUEST_DELAY_MS", "1000")?;
    let max_concurrent_searches = parse_usize("SAASRADAR_MAX_CONCURRENT_SEARCHES", "1")?;
    if max_concurrent_searches == 0 {
        return Err(invalid(
            "SAASRADAR_MAX_CONCURRENT_SEARCHES",
            "must be at least 1".to_string(),
        ));
    }

    let analysis = AnalysisSettings {
        min_group_size: parse_usize("SAASRADAR_MIN_GROUP_SIZE", "2")?,
        max_patterns: parse_usize("SAASRADAR_MAX_PATTERNS", "10")?,
        max_posts: parse_usize("SAASRADAR_MAX_POSTS", "100")?,
        top_validated_min_score: parse_score("SAASRADAR_TOP_VALIDATED_MIN_SCORE", "5.0")?,
        report_min_score: parse_score("SAASRADAR_REPORT_MIN_SCORE", "4.0")?,
        report_top_n: parse_usize("SAASRADAR_REPORT_TOP_N", "15")?,
    };

    let ai_api_key = optional("GEMINI_API_KEY").or_else(|| optional("GOOGLE_API_KEY"));
    let ai_model = or_default("SAASRADAR_AI_MODEL", "gemini-3-flash-preview");
    let ai_base_url = or_default(
        "SAASRADAR_AI_BASE_URL",
        "https://generativelanguage.googleapis.com/",
    );

    Ok(AppConfig {
        env,
        log_level,
        audiences_path,
        results_dir,
        request_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_secs,
        inter_request_delay_ms,
        max_concurrent_searches,
        analysis,
        ai_api_key,
        ai_model,
        ai_base_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SAASRADAR_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
