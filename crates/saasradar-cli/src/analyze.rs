//! Offline commands over posts saved as JSON: `analyze` and `competition`.

use std::path::Path;

use anyhow::Context;
use saasradar_ai::{AiError, GeminiClient};
use saasradar_core::{AppConfig, AudienceRegistry, RawPost};
use saasradar_signals::{merge_posts, PostRecord};

use crate::analysis::{analyze_posts, build_extractor, print_summary, write_report};

/// Reads a JSON array of raw posts and normalizes it into ranked records.
///
/// Posts without a title are dropped; duplicate titles keep the first seen.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of posts.
pub(crate) fn load_posts(path: &Path) -> anyhow::Result<Vec<PostRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raws: Vec<RawPost> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of posts", path.display()))?;
    let total = raws.len();
    let posts = merge_posts(PostRecord::from_raw_batch(raws));
    tracing::info!(
        path = %path.display(),
        total,
        kept = posts.len(),
        "loaded posts"
    );
    Ok(posts)
}

/// # Errors
///
/// Returns an error for an unknown audience, an unreadable input file, or a
/// report that cannot be written.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    input: &Path,
    audience: Option<&str>,
    output: Option<&Path>,
    ai_analysis: bool,
) -> anyhow::Result<()> {
    let context = match audience {
        Some(key) => AudienceRegistry::from_config(config)?.get(key)?.name.clone(),
        None => String::new(),
    };
    let posts = load_posts(input)?;

    let extractor = if ai_analysis {
        Some(build_extractor(config)?)
    } else {
        None
    };
    let analysis = analyze_posts::<GeminiClient>(
        posts,
        &config.analysis,
        extractor.as_ref(),
        &context,
    )
    .await;

    let generated_at = chrono::Local::now().naive_local();
    let path = write_report(&analysis, config, output, generated_at)?;
    print_summary(&analysis, &config.analysis, &path);
    Ok(())
}

/// # Errors
///
/// Returns an error if no API key is configured, the input cannot be loaded,
/// or the AI request fails.
pub(crate) async fn run_competition(
    config: &AppConfig,
    idea: &str,
    input: &Path,
) -> anyhow::Result<()> {
    let posts = load_posts(input)?;
    let extractor = build_extractor(config)?;

    match extractor.analyze_competition(idea, &posts).await {
        Ok(analysis) => {
            println!("# Competition Analysis: {idea}\n");
            println!("{analysis}");
            Ok(())
        }
        Err(AiError::NotConfigured) => {
            anyhow::bail!("AI analysis not available: set GEMINI_API_KEY or GOOGLE_API_KEY")
        }
        Err(e) => Err(anyhow::Error::new(e).context("competition analysis failed")),
    }
}
