//! Standalone markdown document for AI-generated opportunities.

use std::fmt::Write as _;

use saasradar_core::AiOpportunity;

/// Renders every opportunity as a numbered, fully expanded section.
#[must_use]
pub fn render_opportunities(opportunities: &[AiOpportunity]) -> String {
    let mut out = String::from("# AI-Identified SaaS Opportunities\n\n");

    for (i, opp) in opportunities.iter().enumerate() {
        let _ = writeln!(out, "## {}. {}\n", i + 1, opp.name);
        if !opp.tagline.is_empty() {
            let _ = writeln!(out, "**{}**\n", opp.tagline);
        }
        let _ = writeln!(out, "### Problem\n{}\n", opp.problem);
        let _ = writeln!(out, "### Solution\n{}\n", opp.solution);
        let _ = writeln!(out, "### Target Market\n{}\n", opp.target_market);
        let _ = writeln!(out, "### Validation Score: {:.1}/10\n", opp.validation_score);
        let _ = writeln!(
            out,
            "**Market Size Indicator:** {}\n",
            opp.market_size_indicator
        );

        out.push_str("### Evidence\n\n**Pain Points:**\n");
        push_quotes(&mut out, &opp.pain_evidence);
        out.push_str("\n**Payment Signals:**\n");
        push_quotes(&mut out, &opp.payment_evidence);

        let _ = writeln!(
            out,
            "\n### Competition Analysis\n{}\n",
            opp.competition_analysis
        );
        out.push_str("### MVP Features\n");
        for feature in &opp.mvp_features {
            let _ = writeln!(out, "- {feature}");
        }
        let _ = writeln!(
            out,
            "\n### Pricing Suggestion\n{}\n\n---\n",
            opp.pricing_suggestion
        );
    }

    out
}

fn push_quotes(out: &mut String, quotes: &[String]) {
    if quotes.is_empty() {
        out.push_str("- None\n");
    }
    for quote in quotes {
        let _ = writeln!(out, "- \"{quote}\"");
    }
}
