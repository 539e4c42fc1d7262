//! Static phrase tables behind classification and signal extraction.
//!
//! All phrases are lowercase. Matching is literal substring containment
//! against lowercased text, so "pay for" also fires inside "prepay for".

use saasradar_core::IntentCategory;

/// Trigger phrases per intent category, in category declaration order.
///
/// `General` has no phrases; it is assigned only when nothing else matches.
pub const INTENT_PHRASES: &[(IntentCategory, &[&str])] = &[
    (
        IntentCategory::SolutionRequest,
        &[
            "looking for",
            "recommend",
            "anyone know",
            "tool for",
            "software for",
            "app for",
            "what do you use",
            "best tool",
            "need a tool",
            "suggest",
            "alternative to",
            "replacement for",
            "what's the best",
            "which tool",
            "any recommendations",
            "help me find",
            "a tool that",
        ],
    ),
    (
        IntentCategory::PainPoint,
        &[
            "frustrated",
            "hate",
            "annoying",
            "struggle",
            "waste of time",
            "inefficient",
            "broken",
            "sucks",
            "terrible",
            "awful",
            "nightmare",
            "drives me crazy",
            "fed up",
            "tired of",
            "sick of",
            "problem with",
            "doesn't work",
            "failing",
            "unreliable",
        ],
    ),
    (
        IntentCategory::AdviceRequest,
        &[
            "how do you",
            "how to",
            "best way",
            "tips for",
            "advice on",
            "help with",
            "guide",
            "tutorial",
            "explain",
            "what's your process",
            "how does everyone",
            "workflow for",
        ],
    ),
    (
        IntentCategory::WillingnessToPay,
        &[
            "would pay",
            "pay for",
            "budget",
            "worth paying",
            "subscription",
            "pricing",
            "cost",
            "expensive",
            "cheap",
            "affordable",
            "investment",
            "roi",
            "return on",
            "value for money",
            "premium",
            "enterprise",
        ],
    ),
    (
        IntentCategory::Idea,
        &[
            "idea",
            "what if",
            "suggestion",
            "feature request",
            "wish there was",
            "would be cool",
            "imagine if",
            "dream tool",
            "wouldn't it be great",
        ],
    ),
    (
        IntentCategory::SelfPromotion,
        &[
            "i built",
            "i created",
            "just launched",
            "just released",
            "my app",
            "my tool",
            "feedback on",
            "check out my",
            "introducing",
            "announcing",
            "we built",
            "our new",
        ],
    ),
    (
        IntentCategory::MoneyTalk,
        &[
            "revenue",
            "mrr",
            "arr",
            "profit",
            "income",
            "earnings",
            "charge",
            "pricing model",
            "monetize",
            "make money",
            "business model",
        ],
    ),
];

/// Phrases evidencing willingness to pay.
pub const PAYMENT_SIGNALS: &[&str] = &[
    "paid for",
    "pay for",
    "subscription",
    "subscribe",
    "monthly fee",
    "would pay",
    "willing to pay",
    "looking for paid",
    "budget",
    "paid tool",
    "paid service",
    "pricing",
    "cost",
    "expensive",
    "cheaper alternative",
    "paid version",
    "premium",
    "enterprise",
    "currently paying",
    "spent on",
    "investment in",
];

/// Phrases evidencing a pain point.
pub const PAIN_SIGNALS: &[&str] = &[
    "frustrated",
    "hate",
    "annoying",
    "problem",
    "issue",
    "struggle",
    "difficult",
    "time-consuming",
    "manual",
    "inefficient",
    "slow",
    "broken",
    "doesn't work",
    "wish there was",
    "need",
    "looking for",
    "waste of time",
    "tedious",
    "painful",
    "nightmare",
    "headache",
];
