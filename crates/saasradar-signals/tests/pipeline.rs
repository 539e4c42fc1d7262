//! End-to-end checks over the public signals API: raw posts in, ranked
//! records, patterns, and report out.

use chrono::NaiveDate;
use saasradar_core::{Engagement, IntentCategory, RawPost};
use saasradar_signals::{
    aggregate, classify, extract_signals, merge_posts, render_report, theme_summary,
    validation_score, PostRecord, ReportInput, ReportOptions,
};

fn raw(title: &str, source: &str, upvotes: i64, comments: i64) -> RawPost {
    RawPost {
        title: title.to_string(),
        source: source.to_string(),
        upvotes,
        comments,
        ..RawPost::default()
    }
}

#[test]
fn payment_sentence_classifies_and_extracts() {
    let text = "I would pay for a tool that manages my Airbnb listings";
    let intents = classify(text);
    assert!(intents.contains(&IntentCategory::SolutionRequest));
    assert!(intents.contains(&IntentCategory::WillingnessToPay));

    let signals = extract_signals(text);
    assert!(signals.payment.contains(&"would pay"));
    assert!(signals.payment.contains(&"pay for"));
}

#[test]
fn willingness_to_pay_with_high_engagement_scores_nine() {
    let score = validation_score(
        &[IntentCategory::WillingnessToPay],
        Engagement {
            upvotes: 100,
            comments: 50,
        },
        2,
        0,
    );
    assert!((score - 9.0).abs() < f64::EPSILON, "got {score}");
}

#[test]
fn general_post_without_engagement_scores_zero() {
    let score = validation_score(&[IntentCategory::General], Engagement::default(), 0, 0);
    assert!(score.abs() < f64::EPSILON, "got {score}");
}

#[test]
fn lone_intent_is_dropped_from_patterns_but_kept_in_themes() {
    let posts = PostRecord::from_raw_batch(vec![
        raw("Frustrated with my invoicing setup", "freelance", 3, 1),
        raw("Bookkeeping is a nightmare", "freelance", 8, 2),
        raw("Tired of chasing late payments", "freelance", 1, 0),
        raw("Anyone know a good proposal builder?", "freelance", 2, 4),
    ]);

    let patterns = aggregate(&posts, 2);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].category, IntentCategory::PainPoint);
    assert_eq!(patterns[0].post_count, 3);

    let themes = theme_summary(&posts);
    assert!(themes.contains(&(IntentCategory::SolutionRequest, 1)));
}

#[test]
fn duplicate_titles_across_sources_keep_first_seen() {
    let posts = PostRecord::from_raw_batch(vec![
        raw("What do you use for client onboarding?", "consulting", 4, 2),
        raw("What do you use for client onboarding?", "freelance", 90, 30),
    ]);
    let merged = merge_posts(posts);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source(), "consulting");
}

#[test]
fn full_pipeline_renders_a_report() {
    let posts = merge_posts(PostRecord::from_raw_batch(vec![
        raw("Looking for an alternative to QuickBooks", "smallbusiness", 40, 22),
        raw("", "smallbusiness", 900, 400),
        raw("Would pay for software for scheduling staff", "smallbusiness", 75, 31),
        raw("Frustrated with payroll, any recommendations?", "smallbusiness", 12, 9),
        raw("Weekly wins thread", "smallbusiness", 3, 1),
    ]));
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].title(), "Would pay for software for scheduling staff");

    let patterns = aggregate(&posts, 2);
    let generated_at = NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let report = render_report(
        &ReportInput {
            posts: &posts,
            patterns: &patterns,
            ..ReportInput::default()
        },
        &ReportOptions::new(generated_at),
    );

    assert!(report.contains("**Total Posts Analyzed:** 4"));
    assert!(report.contains("### Solution Requests (3 posts)"));
    assert!(report.contains("### 1. Would pay for software for scheduling staff"));
}
