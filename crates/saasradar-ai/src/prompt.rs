//! Prompt construction for pattern, opportunity, and competition analysis.

use std::fmt::Write as _;

use saasradar_core::AiPattern;
use saasradar_signals::PostRecord;

const PROMPT_BODY_CHARS: usize = 500;
const PATTERN_SUMMARIES_IN_PROMPT: usize = 5;

/// Posts included in the opportunity prompt.
pub const OPPORTUNITY_PROMPT_POSTS: usize = 50;
/// Posts included in the competition prompt.
pub const COMPETITION_PROMPT_POSTS: usize = 30;

/// Numbered plain-text listing of the first `max_posts` posts.
///
/// Bodies are cut to 500 characters; an empty body is shown as `N/A`.
#[must_use]
pub fn format_posts_for_prompt(posts: &[PostRecord], max_posts: usize) -> String {
    posts
        .iter()
        .take(max_posts)
        .enumerate()
        .map(|(i, post)| {
            let body: String = post.body().chars().take(PROMPT_BODY_CHARS).collect();
            let body = if body.is_empty() { "N/A".to_owned() } else { body };
            let intents = post
                .intents()
                .iter()
                .map(|intent| intent.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let engagement = post.engagement();
            format!(
                "\nPOST {}:\nTitle: {}\nBody: {}\nSubreddit: r/{}\nEngagement: ↑{} comments:{}\nDetected Intents: {}\n---",
                i + 1,
                post.title(),
                body,
                post.source(),
                engagement.upvotes,
                engagement.comments,
                intents,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[must_use]
pub fn pattern_prompt(posts_text: &str, audience_context: &str, max_patterns: usize) -> String {
    let context = non_empty_or(audience_context, "General SaaS audience research");
    format!(
        r#"You are an expert at identifying SaaS product opportunities from online discussions.

CONTEXT: {context}

Analyze these Reddit posts and identify the TOP {max_patterns} PATTERNS of common needs, problems, or requests that software could solve.

POSTS TO ANALYZE:
{posts_text}

For each pattern, provide:
1. A specific pattern name (e.g. "Seeking Property Management Software", not "Software Requests")
2. A description of what people are asking for
3. A clear problem statement
4. The target audience
5. Validation signals found in the posts (quotes showing pain or willingness to pay)
6. Two or three example quotes
7. Competition notes (existing solutions mentioned, gaps identified)
8. An opportunity score from 0 to 10 based on frequency, pain level, and payment signals
9. Recommended MVP features
10. Monetization potential

Respond in exactly this JSON format:
{{
    "patterns": [
        {{
            "name": "Pattern Name",
            "description": "What people are looking for",
            "problem_statement": "Clear problem being solved",
            "target_audience": "Who has this problem",
            "post_count": 5,
            "validation_signals": ["signal 1", "signal 2"],
            "example_quotes": ["quote 1", "quote 2"],
            "competition_notes": "Existing solutions and gaps",
            "opportunity_score": 7.5,
            "recommended_features": ["feature 1", "feature 2"],
            "monetization_potential": "Pricing thoughts"
        }}
    ]
}}

Prioritize patterns where people explicitly mention looking for tools, frustration with current solutions, willingness to pay, or specific feature requests.

Return ONLY valid JSON, no other text."#
    )
}

#[must_use]
pub fn opportunity_prompt(
    posts_text: &str,
    ai_patterns: &[AiPattern],
    audience_context: &str,
) -> String {
    let context = non_empty_or(audience_context, "General audience");

    let mut patterns_text = String::new();
    if !ai_patterns.is_empty() {
        patterns_text.push_str("\n\nIDENTIFIED PATTERNS:\n");
        for pattern in ai_patterns.iter().take(PATTERN_SUMMARIES_IN_PROMPT) {
            let _ = writeln!(
                patterns_text,
                "- {}: {} (Score: {})",
                pattern.name, pattern.description, pattern.opportunity_score
            );
        }
    }

    format!(
        r#"You are a SaaS product strategist. Based on this research data, identify the TOP 5 most promising SaaS product opportunities.

CONTEXT: {context}

RESEARCH DATA:
{posts_text}
{patterns_text}

For each opportunity, provide a complete product concept:

{{
    "opportunities": [
        {{
            "name": "Product Name",
            "tagline": "One-line value proposition",
            "problem": "The specific problem being solved",
            "solution": "How the product solves it",
            "target_market": "Who buys this",
            "market_size_indicator": "Evidence of market size from the data",
            "validation_score": 8.5,
            "pain_evidence": ["Quote showing pain"],
            "payment_evidence": ["Quote showing willingness to pay"],
            "competition_analysis": "Existing solutions and how to differentiate",
            "mvp_features": ["Feature 1", "Feature 2", "Feature 3"],
            "pricing_suggestion": "$X/month for Y tier"
        }}
    ]
}}

Prioritize opportunities with specific pain points, evidence of willingness to pay, an identifiable target market, a gap in existing solutions, and a scope feasible for a micro-SaaS.

Return ONLY valid JSON."#
    )
}

#[must_use]
pub fn competition_prompt(product_idea: &str, posts_text: &str) -> String {
    format!(
        r"Analyze the competitive landscape for this product idea based on Reddit discussions:

PRODUCT IDEA: {product_idea}

RELEVANT DISCUSSIONS:
{posts_text}

Provide:
1. Existing solutions mentioned in the discussions
2. Common complaints about existing solutions
3. Feature gaps people are asking for
4. Price points mentioned
5. Differentiation opportunities
6. Barriers to entry
7. Overall competition assessment (Low/Medium/High)

Be specific and cite evidence from the posts."
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
