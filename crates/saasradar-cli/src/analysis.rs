//! The shared tail of `scan` and `analyze`: aggregate, optional AI pass,
//! report file, console summary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use saasradar_ai::{render_opportunities, CompletionClient, GeminiClient, PatternExtractor};
use saasradar_core::{AiOpportunity, AiPattern, AnalysisSettings, AppConfig};
use saasradar_signals::{
    aggregate, render_report, theme_summary, top_validated, Pattern, PostRecord, ReportInput,
    ReportOptions,
};

const SUMMARY_TOP_N: usize = 5;
const SUMMARY_TITLE_CHARS: usize = 60;

/// Everything produced for one report.
#[derive(Debug)]
pub(crate) struct Analysis {
    pub posts: Vec<PostRecord>,
    pub patterns: Vec<Pattern>,
    pub ai_patterns: Option<Vec<AiPattern>>,
    pub ai_opportunities: Option<Vec<AiOpportunity>>,
}

/// Builds the Gemini-backed extractor, or a disabled one without an API key.
pub(crate) fn build_extractor(
    config: &AppConfig,
) -> anyhow::Result<PatternExtractor<GeminiClient>> {
    let Some(api_key) = config.ai_api_key.as_deref() else {
        return Ok(PatternExtractor::disabled(config.analysis.clone()));
    };
    let client = GeminiClient::with_base_url(
        api_key,
        &config.ai_model,
        config.request_timeout_secs,
        &config.ai_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Gemini client: {e}"))?;
    Ok(PatternExtractor::new(client, config.analysis.clone()))
}

/// Aggregates `posts` and, when an extractor is given, runs the AI pass.
pub(crate) async fn analyze_posts<C: CompletionClient>(
    posts: Vec<PostRecord>,
    settings: &AnalysisSettings,
    extractor: Option<&PatternExtractor<C>>,
    audience_context: &str,
) -> Analysis {
    let patterns = aggregate(&posts, settings.min_group_size);

    let (ai_patterns, ai_opportunities) = match extractor {
        Some(_) if posts.is_empty() => {
            tracing::warn!("no posts to analyze, skipping AI analysis");
            (None, None)
        }
        Some(extractor) => {
            if !extractor.is_enabled() {
                tracing::warn!("AI analysis requested but no API key is configured");
            }
            let outcome = extractor.extract_patterns(&posts, audience_context).await;
            let ai_patterns = outcome.ai_patterns().map(<[AiPattern]>::to_vec);
            let opportunities = extractor
                .generate_opportunities(
                    &posts,
                    ai_patterns.as_deref().unwrap_or_default(),
                    audience_context,
                )
                .await;
            let opportunities = (!opportunities.is_empty()).then_some(opportunities);
            (ai_patterns, opportunities)
        }
        None => (None, None),
    };

    Analysis {
        posts,
        patterns,
        ai_patterns,
        ai_opportunities,
    }
}

/// `<results_dir>/saasradar_report_<YYYYmmdd_HHMMSS>.md`
pub(crate) fn default_report_path(results_dir: &Path, generated_at: NaiveDateTime) -> PathBuf {
    results_dir.join(format!(
        "saasradar_report_{}.md",
        generated_at.format("%Y%m%d_%H%M%S")
    ))
}

/// Sibling file holding the expanded AI opportunities document.
pub(crate) fn opportunities_path(report_path: &Path) -> PathBuf {
    let stem = report_path
        .file_stem()
        .map_or_else(|| "saasradar_report".into(), |s| s.to_string_lossy());
    report_path.with_file_name(format!("{stem}_opportunities.md"))
}

/// Renders and writes the report, returning the path written.
///
/// # Errors
///
/// Returns an error if the output directory or file cannot be written.
pub(crate) fn write_report(
    analysis: &Analysis,
    config: &AppConfig,
    output: Option<&Path>,
    generated_at: NaiveDateTime,
) -> anyhow::Result<PathBuf> {
    let path = output.map_or_else(
        || default_report_path(&config.results_dir, generated_at),
        Path::to_path_buf,
    );

    let input = ReportInput {
        posts: &analysis.posts,
        patterns: &analysis.patterns,
        ai_patterns: analysis.ai_patterns.as_deref(),
        ai_opportunities: analysis.ai_opportunities.as_deref(),
    };
    let options = ReportOptions {
        min_score: config.analysis.report_min_score,
        top_n: config.analysis.report_top_n,
        ..ReportOptions::new(generated_at)
    };
    let report = render_report(&input, &options);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, report)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");

    if let Some(opportunities) = analysis.ai_opportunities.as_deref() {
        let companion = opportunities_path(&path);
        std::fs::write(&companion, render_opportunities(opportunities))
            .with_context(|| format!("failed to write {}", companion.display()))?;
        tracing::info!(path = %companion.display(), "opportunities document written");
    }

    Ok(path)
}

pub(crate) fn print_summary(analysis: &Analysis, settings: &AnalysisSettings, report_path: &Path) {
    println!("\n{}", "=".repeat(60));
    println!("SUMMARY");
    println!("{}", "=".repeat(60));
    println!("Total posts: {}", analysis.posts.len());
    println!("Patterns found: {}", analysis.patterns.len());
    if let Some(ai_patterns) = &analysis.ai_patterns {
        println!("AI patterns: {}", ai_patterns.len());
    }
    if let Some(opportunities) = &analysis.ai_opportunities {
        println!("AI opportunities: {}", opportunities.len());
    }

    println!("\nTheme breakdown:");
    for (intent, count) in theme_summary(&analysis.posts) {
        println!("  - {}: {count}", intent.label());
    }

    println!("\nTop {SUMMARY_TOP_N} validated ideas:");
    let top = top_validated(
        &analysis.posts,
        settings.top_validated_min_score,
        SUMMARY_TOP_N,
    );
    if top.is_empty() {
        println!(
            "  none scored {:.1} or higher",
            settings.top_validated_min_score
        );
    }
    for (i, post) in top.iter().enumerate() {
        let title: String = post.title().chars().take(SUMMARY_TITLE_CHARS).collect();
        println!("  {}. [{:.1}/10] {title}", i + 1, post.validation_score());
    }

    println!("\nFull report: {}", report_path.display());
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
