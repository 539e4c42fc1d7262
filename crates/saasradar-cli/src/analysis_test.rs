use chrono::NaiveDate;
use saasradar_core::{Environment, RawPost};

use super::*;

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 14)
        .unwrap()
        .and_hms_opt(9, 26, 53)
        .unwrap()
}

fn test_config(results_dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        audiences_path: None,
        results_dir: results_dir.to_path_buf(),
        request_timeout_secs: 5,
        user_agent: "saasradar-test".to_string(),
        max_retries: 0,
        retry_backoff_base_secs: 0,
        inter_request_delay_ms: 0,
        max_concurrent_searches: 1,
        analysis: AnalysisSettings::default(),
        ai_api_key: None,
        ai_model: "test-model".to_string(),
        ai_base_url: "http://localhost:9".to_string(),
    }
}

fn posts() -> Vec<PostRecord> {
    PostRecord::from_raw_batch([
        ("Frustrated with invoicing, would pay for a fix", 40, 12),
        ("Tired of chasing late payments", 5, 2),
        ("Weekend thread", 1, 0),
    ]
    .map(|(title, upvotes, comments)| RawPost {
        title: title.to_string(),
        source: "freelance".to_string(),
        upvotes,
        comments,
        ..RawPost::default()
    }))
}

fn opportunity() -> AiOpportunity {
    AiOpportunity {
        name: "InvoiceNudge".to_string(),
        tagline: "Get paid on time".to_string(),
        problem: String::new(),
        solution: String::new(),
        target_market: String::new(),
        market_size_indicator: String::new(),
        validation_score: 7.0,
        pain_evidence: Vec::new(),
        payment_evidence: Vec::new(),
        competition_analysis: String::new(),
        mvp_features: Vec::new(),
        pricing_suggestion: String::new(),
    }
}

#[test]
fn default_report_path_is_timestamped() {
    let path = default_report_path(Path::new("results"), generated_at());
    assert_eq!(path, Path::new("results/saasradar_report_20260314_092653.md"));
}

#[test]
fn opportunities_path_sits_next_to_report() {
    let path = opportunities_path(Path::new("out/report.md"));
    assert_eq!(path, Path::new("out/report_opportunities.md"));
}

#[tokio::test]
async fn analysis_without_extractor_has_no_ai_sections() {
    let analysis = analyze_posts::<GeminiClient>(
        posts(),
        &AnalysisSettings::default(),
        None,
        "",
    )
    .await;

    assert_eq!(analysis.posts.len(), 3);
    assert_eq!(analysis.patterns.len(), 1, "only pain points reach the minimum");
    assert!(analysis.ai_patterns.is_none());
    assert!(analysis.ai_opportunities.is_none());
}

#[tokio::test]
async fn disabled_extractor_leaves_ai_sections_empty() {
    let extractor = PatternExtractor::<GeminiClient>::disabled(AnalysisSettings::default());
    let analysis =
        analyze_posts(posts(), &AnalysisSettings::default(), Some(&extractor), "Freelancers")
            .await;

    assert!(analysis.ai_patterns.is_none());
    assert!(analysis.ai_opportunities.is_none());
    assert_eq!(analysis.patterns.len(), 1);
}

#[test]
fn build_extractor_without_key_is_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = build_extractor(&test_config(dir.path())).unwrap();
    assert!(!extractor.is_enabled());

    let mut config = test_config(dir.path());
    config.ai_api_key = Some("key".to_string());
    assert!(build_extractor(&config).unwrap().is_enabled());
}

#[test]
fn write_report_uses_results_dir_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let results_dir = dir.path().join("nested/results");
    let config = test_config(&results_dir);
    let analysis = Analysis {
        posts: posts(),
        patterns: Vec::new(),
        ai_patterns: None,
        ai_opportunities: None,
    };

    let path = write_report(&analysis, &config, None, generated_at()).unwrap();

    assert_eq!(path, results_dir.join("saasradar_report_20260314_092653.md"));
    let report = std::fs::read_to_string(&path).unwrap();
    assert!(report.starts_with("# SaaS Radar: Opportunity Discovery Report"));
    assert!(report.contains("**Generated:** 2026-03-14 09:26:53"));
    assert!(report.contains("**Total Posts Analyzed:** 3"));
    assert!(!opportunities_path(&path).exists());
}

#[test]
fn write_report_with_opportunities_writes_companion_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let output = dir.path().join("custom.md");
    let analysis = Analysis {
        posts: posts(),
        patterns: Vec::new(),
        ai_patterns: None,
        ai_opportunities: Some(vec![opportunity()]),
    };

    let path = write_report(&analysis, &config, Some(&output), generated_at()).unwrap();

    assert_eq!(path, output);
    let companion = std::fs::read_to_string(dir.path().join("custom_opportunities.md")).unwrap();
    assert!(companion.contains("## 1. InvoiceNudge"));
}
