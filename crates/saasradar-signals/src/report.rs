//! Markdown report assembly.
//!
//! Rendering is a pure function of its inputs; the generation timestamp is
//! passed in rather than read from the clock.

use chrono::NaiveDateTime;
use saasradar_core::{AiOpportunity, AiPattern};

use crate::patterns::{theme_summary, top_validated, Pattern};
use crate::record::PostRecord;

const TITLE_CHARS: usize = 80;
const EXEMPLAR_CHARS: usize = 100;
const EXEMPLARS_SHOWN: usize = 3;
const SIGNALS_SHOWN: usize = 3;
const AI_ITEMS_SHOWN: usize = 5;
const PLACEHOLDER: &str = "N/A";

/// Everything the report draws from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportInput<'a> {
    /// Posts in presentation order (see [`crate::merge_posts`]).
    pub posts: &'a [PostRecord],
    pub patterns: &'a [Pattern],
    pub ai_patterns: Option<&'a [AiPattern]>,
    pub ai_opportunities: Option<&'a [AiOpportunity]>,
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub generated_at: NaiveDateTime,
    /// Minimum score for the top-opportunities section.
    pub min_score: f64,
    /// Maximum number of entries in the top-opportunities section.
    pub top_n: usize,
}

impl ReportOptions {
    #[must_use]
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at,
            min_score: 4.0,
            top_n: 15,
        }
    }
}

/// Render the full markdown report.
#[must_use]
pub fn render_report(input: &ReportInput<'_>, options: &ReportOptions) -> String {
    let mut out = String::new();
    render_header(&mut out, input, options);
    render_theme_table(&mut out, input.posts);
    render_top_posts(&mut out, input.posts, options);
    render_patterns(&mut out, input.patterns);

    if let Some(ai_patterns) = input.ai_patterns.filter(|p| !p.is_empty()) {
        render_ai_patterns(&mut out, ai_patterns);
    }
    if let Some(opportunities) = input.ai_opportunities.filter(|o| !o.is_empty()) {
        render_ai_opportunities(&mut out, opportunities);
    }

    render_footer(&mut out);
    out
}

fn render_header(out: &mut String, input: &ReportInput<'_>, options: &ReportOptions) {
    out.push_str("# SaaS Radar: Opportunity Discovery Report\n\n");
    out.push_str(&format!(
        "**Generated:** {}\n",
        options.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("**Total Posts Analyzed:** {}\n", input.posts.len()));
    out.push_str(&format!("**Patterns Found:** {}\n\n", input.patterns.len()));
}

fn render_theme_table(out: &mut String, posts: &[PostRecord]) {
    out.push_str("---\n\n## Theme Summary\n\n");
    out.push_str("| Theme | Post Count |\n");
    out.push_str("|-------|------------|\n");
    for (category, count) in theme_summary(posts) {
        out.push_str(&format!("| {} | {count} |\n", category.label()));
    }
    out.push('\n');
}

fn render_top_posts(out: &mut String, posts: &[PostRecord], options: &ReportOptions) {
    out.push_str("---\n\n## Top Validated SaaS Opportunities\n\n");

    let top = top_validated(posts, options.min_score, options.top_n);
    if top.is_empty() {
        out.push_str(&format!(
            "_No posts scored {:.1} or higher._\n\n",
            options.min_score
        ));
        return;
    }

    for (rank, post) in top.iter().enumerate() {
        let engagement = post.engagement();
        let intents = post
            .intents()
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        out.push_str(&format!(
            "### {}. {}\n\n",
            rank + 1,
            truncate_chars(post.title(), TITLE_CHARS)
        ));
        out.push_str(&format!(
            "- **Validation Score:** {:.1}/10\n",
            post.validation_score()
        ));
        out.push_str(&format!("- **Subreddit:** {}\n", subreddit_label(post.source())));
        out.push_str(&format!(
            "- **Engagement:** ↑{} | 💬{}\n",
            engagement.upvotes, engagement.comments
        ));
        out.push_str(&format!("- **Intents:** {intents}\n"));
        out.push_str(&format!(
            "- **Payment Signals:** {}\n",
            signal_list(post.payment_signals())
        ));
        out.push_str(&format!(
            "- **Pain Signals:** {}\n",
            signal_list(post.pain_signals())
        ));
        out.push_str(&format!("- **URL:** {}\n\n", or_placeholder(post.url())));
    }
}

fn render_patterns(out: &mut String, patterns: &[Pattern]) {
    out.push_str("---\n\n## Identified Patterns\n\n");
    if patterns.is_empty() {
        out.push_str("_No recurring patterns found._\n\n");
        return;
    }

    for pattern in patterns {
        out.push_str(&format!(
            "### {} ({} posts)\n\n",
            pattern.name, pattern.post_count
        ));
        out.push_str(&format!(
            "- **Total Engagement:** ↑{} | 💬{}\n",
            pattern.total_upvotes, pattern.total_comments
        ));
        out.push_str(&format!(
            "- **Avg Validation Score:** {:.1}/10\n\n",
            pattern.average_validation_score
        ));
        out.push_str("**Example Posts:**\n");
        for example in pattern.exemplars.iter().take(EXEMPLARS_SHOWN) {
            out.push_str(&format!("- {}\n", truncate_chars(example, EXEMPLAR_CHARS)));
        }
        out.push('\n');
    }
}

fn render_ai_patterns(out: &mut String, patterns: &[AiPattern]) {
    out.push_str("---\n\n## AI-Identified Patterns\n\n");
    for pattern in patterns.iter().take(AI_ITEMS_SHOWN) {
        out.push_str(&format!(
            "### {} (Score: {:.1}/10)\n\n",
            or_placeholder(&pattern.name),
            pattern.opportunity_score
        ));
        out.push_str(&format!("**{}**\n\n", or_placeholder(&pattern.description)));
        out.push_str(&format!(
            "- **Problem:** {}\n",
            or_placeholder(&pattern.problem_statement)
        ));
        out.push_str(&format!(
            "- **Target:** {}\n",
            or_placeholder(&pattern.target_audience)
        ));
        out.push_str(&format!("- **Posts:** {}\n\n", pattern.post_count));

        out.push_str("**Validation Signals:**\n");
        push_bullets(out, pattern.validation_signals.iter().take(SIGNALS_SHOWN));
        out.push_str("\n**Recommended Features:**\n");
        push_bullets(out, pattern.recommended_features.iter().take(SIGNALS_SHOWN));
        out.push_str(&format!(
            "\n**Monetization:** {}\n\n",
            or_placeholder(&pattern.monetization_potential)
        ));
    }
}

fn render_ai_opportunities(out: &mut String, opportunities: &[AiOpportunity]) {
    out.push_str("---\n\n## AI-Generated SaaS Opportunities\n\n");
    for (rank, opp) in opportunities.iter().take(AI_ITEMS_SHOWN).enumerate() {
        out.push_str(&format!("### {}. {}\n\n", rank + 1, or_placeholder(&opp.name)));
        out.push_str(&format!("**{}**\n\n", or_placeholder(&opp.tagline)));
        out.push_str("| Aspect | Details |\n");
        out.push_str("|--------|---------|\n");
        out.push_str(&format!("| Problem | {} |\n", table_cell(&opp.problem)));
        out.push_str(&format!("| Solution | {} |\n", table_cell(&opp.solution)));
        out.push_str(&format!(
            "| Target Market | {} |\n",
            table_cell(&opp.target_market)
        ));
        out.push_str(&format!(
            "| Validation Score | {:.1}/10 |\n",
            opp.validation_score
        ));
        out.push_str(&format!(
            "| Pricing | {} |\n\n",
            table_cell(&opp.pricing_suggestion)
        ));

        out.push_str("**MVP Features:**\n");
        push_bullets(out, opp.mvp_features.iter());
        out.push_str(&format!(
            "\n**Competition:** {}\n\n",
            or_placeholder(&opp.competition_analysis)
        ));
    }
}

fn render_footer(out: &mut String) {
    out.push_str("---\n\n## Recommended Next Steps\n\n");
    out.push_str(
        "1. **Deep Dive:** Click through to high-scoring posts to read full discussions\n",
    );
    out.push_str(
        "2. **Competition Check:** Search for \"[problem] software\" to assess competition\n",
    );
    out.push_str(
        "3. **Validate Further:** Look for posts with explicit willingness-to-pay signals\n",
    );
    out.push_str(
        "4. **Cross-Reference:** Check if same problems appear in multiple subreddits\n",
    );
    out.push_str("5. **Build MVP:** Focus on problems with score 7+ and payment signals\n\n");
    out.push_str("---\n\n*Generated by SaaS Radar*\n");
}

/// Truncate to `max` characters, appending "..." when anything was cut.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn or_placeholder(text: &str) -> &str {
    if text.trim().is_empty() {
        PLACEHOLDER
    } else {
        text
    }
}

fn table_cell(text: &str) -> String {
    or_placeholder(text).replace('|', "\\|").replace('\n', " ")
}

fn subreddit_label(source: &str) -> String {
    if source.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        format!("r/{source}")
    }
}

fn signal_list(signals: &[String]) -> String {
    if signals.is_empty() {
        "None".to_string()
    } else {
        signals
            .iter()
            .take(SIGNALS_SHOWN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn push_bullets<'a>(out: &mut String, items: impl Iterator<Item = &'a String>) {
    let mut any = false;
    for item in items {
        out.push_str(&format!("- {item}\n"));
        any = true;
    }
    if !any {
        out.push_str(&format!("- {PLACEHOLDER}\n"));
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
