//! Read-only commands: audience listing and single-text classification.

use saasradar_core::{AppConfig, AudienceRegistry, Engagement};
use saasradar_signals::{classify, extract_signals, validation_score};

pub(crate) fn run_audiences(config: &AppConfig) -> anyhow::Result<()> {
    let registry = AudienceRegistry::from_config(config)?;

    println!("Available audiences:\n");
    for audience in registry.iter() {
        println!("  {}:", audience.key);
        println!("    Name: {}", audience.name);
        println!("    Subreddits: {}", audience.subreddits.join(", "));
        if !audience.keywords.is_empty() {
            println!("    Keywords: {}", audience.keywords.join(", "));
        }
        println!();
    }
    Ok(())
}

pub(crate) fn run_classify(text: &str, upvotes: u64, comments: u64) {
    let intents = classify(text);
    let signals = extract_signals(text);
    let score = validation_score(
        &intents,
        Engagement { upvotes, comments },
        signals.payment.len(),
        signals.pain.len(),
    );

    let intents: Vec<&str> = intents.iter().map(|i| i.as_str()).collect();
    println!("Intents:         {}", intents.join(", "));
    println!("Payment signals: {}", list_or_none(&signals.payment));
    println!("Pain signals:    {}", list_or_none(&signals.pain));
    println!("Validation:      {score:.1}/10");
}

fn list_or_none(items: &[&str]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
