//! `scan`: search Reddit for an audience or subreddit list and report.

use clap::Args;
use saasradar_ai::GeminiClient;
use saasradar_core::{AppConfig, AudienceRegistry, IntentCategory};
use saasradar_reddit::{collect_posts, intent_queries, CollectOptions, RedditClient};

use crate::analysis::{analyze_posts, build_extractor, print_summary, write_report};

const DEFAULT_AUDIENCE: &str = "saas_founders";
const DEFAULT_AUDIENCE_MAX_POSTS: usize = 15;
const DEFAULT_MAX_POSTS: usize = 20;

#[derive(Debug, Args)]
pub(crate) struct ScanArgs {
    /// Curated audience key (see `saasradar audiences`)
    #[arg(long, conflicts_with = "subreddits")]
    pub audience: Option<String>,

    /// Comma-separated subreddits to search instead of an audience
    #[arg(long, value_delimiter = ',')]
    pub subreddits: Option<Vec<String>>,

    /// Comma-separated intent categories to search for
    #[arg(long, value_delimiter = ',', default_value = "solution_request,pain_point")]
    pub themes: Vec<String>,

    /// Posts to collect per subreddit, split across themes
    #[arg(long)]
    pub max_posts: Option<usize>,

    /// Report path (defaults to a timestamped file in the results directory)
    #[arg(long)]
    pub output: Option<std::path::PathBuf>,

    /// Run AI pattern and opportunity extraction
    #[arg(long)]
    pub ai_analysis: bool,

    /// Print the search plan without contacting Reddit
    #[arg(long)]
    pub dry_run: bool,
}

/// What a scan will search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScanPlan {
    /// Audience name for AI context; empty for ad-hoc subreddit lists.
    pub context: String,
    pub sources: Vec<String>,
    pub intents: Vec<IntentCategory>,
    pub max_posts_per_source: usize,
}

/// Parses theme names, dropping duplicates and keeping first-seen order.
///
/// # Errors
///
/// Returns `ConfigError::UnknownIntent` (listing the valid names) for the
/// first unrecognized theme.
pub(crate) fn parse_themes(
    themes: &[String],
) -> Result<Vec<IntentCategory>, saasradar_core::ConfigError> {
    let mut intents = Vec::with_capacity(themes.len());
    for theme in themes.iter().filter(|t| !t.trim().is_empty()) {
        let intent: IntentCategory = theme.parse()?;
        if !intents.contains(&intent) {
            intents.push(intent);
        }
    }
    Ok(intents)
}

/// Resolves CLI arguments into a concrete search plan.
///
/// # Errors
///
/// Returns an error for an unknown audience key, an unknown theme, or an
/// empty subreddit list.
pub(crate) fn resolve_plan(
    args: &ScanArgs,
    registry: &AudienceRegistry,
) -> anyhow::Result<ScanPlan> {
    let intents = parse_themes(&args.themes)?;
    if intents.is_empty() {
        anyhow::bail!("at least one theme is required");
    }

    let (context, sources, default_max) = match (&args.audience, &args.subreddits) {
        (Some(key), _) => {
            let audience = registry.get(key)?;
            (
                audience.name.clone(),
                audience.subreddits.clone(),
                DEFAULT_MAX_POSTS,
            )
        }
        (None, Some(subreddits)) => {
            let sources: Vec<String> = subreddits
                .iter()
                .map(|s| s.trim().trim_start_matches("r/").to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if sources.is_empty() {
                anyhow::bail!("--subreddits must name at least one subreddit");
            }
            (String::new(), sources, DEFAULT_MAX_POSTS)
        }
        (None, None) => {
            let audience = registry.get(DEFAULT_AUDIENCE)?;
            (
                audience.name.clone(),
                audience.subreddits.clone(),
                DEFAULT_AUDIENCE_MAX_POSTS,
            )
        }
    };

    Ok(ScanPlan {
        context,
        sources,
        intents,
        max_posts_per_source: args.max_posts.unwrap_or(default_max),
    })
}

fn print_plan(plan: &ScanPlan) {
    let per_intent = (plan.max_posts_per_source / plan.intents.len().max(1)).max(1);
    println!(
        "dry-run: would search {} subreddits x {} themes ({} posts per theme)",
        plan.sources.len(),
        plan.intents.len(),
        per_intent
    );
    if !plan.context.is_empty() {
        println!("  audience: {}", plan.context);
    }
    println!("  subreddits: {}", plan.sources.join(", "));
    for intent in &plan.intents {
        let queries: Vec<&str> = intent_queries(*intent).iter().take(3).copied().collect();
        println!("  {intent}: {}", queries.join(" | "));
    }
}

/// Collect, analyze, and report.
///
/// # Errors
///
/// Returns an error if the plan cannot be resolved, the Reddit client cannot
/// be built, or the report cannot be written. Individual failed searches are
/// logged and skipped.
pub(crate) async fn run_scan(config: &AppConfig, args: &ScanArgs) -> anyhow::Result<()> {
    let registry = AudienceRegistry::from_config(config)?;
    if args.audience.is_none() && args.subreddits.is_none() {
        println!("no audience or subreddits given; using default audience '{DEFAULT_AUDIENCE}'");
    }
    let plan = resolve_plan(args, &registry)?;

    if args.dry_run {
        print_plan(&plan);
        return Ok(());
    }

    let client = RedditClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Reddit client: {e}"))?;

    let options = CollectOptions {
        inter_request_delay_ms: config.inter_request_delay_ms,
        max_concurrent_searches: config.max_concurrent_searches,
        ..CollectOptions::default()
    };

    let collected = collect_posts(
        &client,
        &plan.sources,
        &plan.intents,
        plan.max_posts_per_source,
        &options,
    )
    .await;

    if collected.failed_searches > 0 {
        println!(
            "{} of {} searches failed; see log for details",
            collected.failed_searches, collected.searches
        );
    }

    let extractor = if args.ai_analysis {
        Some(build_extractor(config)?)
    } else {
        None
    };
    let analysis = analyze_posts::<GeminiClient>(
        collected.posts,
        &config.analysis,
        extractor.as_ref(),
        &plan.context,
    )
    .await;

    let generated_at = chrono::Local::now().naive_local();
    let path = write_report(&analysis, config, args.output.as_deref(), generated_at)?;
    print_summary(&analysis, &config.analysis, &path);
    Ok(())
}
