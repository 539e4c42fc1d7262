//! Shared domain types and configuration for SaaS Radar.
//!
//! Holds the intent taxonomy, raw post records handed over by collectors,
//! the AI payload shapes, environment-driven application config, and the
//! audience registry.

pub mod app_config;
pub mod audiences;
pub mod config;
pub mod intent;
pub mod opportunities;
pub mod posts;

use thiserror::Error;

pub use app_config::{AnalysisSettings, AppConfig, Environment};
pub use audiences::{Audience, AudienceRegistry};
pub use config::{load_app_config, load_app_config_from_env};
pub use intent::IntentCategory;
pub use opportunities::{AiOpportunity, AiPattern};
pub use posts::{Engagement, RawPost};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read audiences file {path}: {source}")]
    AudiencesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse audiences file: {0}")]
    AudiencesFileParse(#[from] serde_yaml::Error),

    #[error("audience validation failed: {0}")]
    Validation(String),

    #[error("unknown audience '{key}'; available: {available}")]
    UnknownAudience { key: String, available: String },

    #[error("unknown intent category '{name}'; expected one of: {available}")]
    UnknownIntent { name: String, available: String },
}
