use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Knobs consumed by aggregation, AI context building, and report rendering.
///
/// `top_validated_min_score` feeds the console summary and
/// `report_min_score` feeds the report's top-opportunities section; they are
/// deliberately separate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub min_group_size: usize,
    pub max_patterns: usize,
    pub max_posts: usize,
    pub top_validated_min_score: f64,
    pub report_min_score: f64,
    pub report_top_n: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            min_group_size: 2,
            max_patterns: 10,
            max_posts: 100,
            top_validated_min_score: 5.0,
            report_min_score: 4.0,
            report_top_n: 15,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub audiences_path: Option<PathBuf>,
    pub results_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub inter_request_delay_ms: u64,
    pub max_concurrent_searches: usize,
    pub analysis: AnalysisSettings,
    pub ai_api_key: Option<String>,
    pub ai_model: String,
    pub ai_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("audiences_path", &self.audiences_path)
            .field("results_dir", &self.results_dir)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_secs", &self.retry_backoff_base_secs)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("max_concurrent_searches", &self.max_concurrent_searches)
            .field("analysis", &self.analysis)
            .field(
                "ai_api_key",
                &self.ai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("ai_model", &self.ai_model)
            .field("ai_base_url", &self.ai_base_url)
            .finish()
    }
}
