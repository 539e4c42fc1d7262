use saasradar_core::IntentCategory;

const SOLUTION_REQUEST_QUERIES: &[&str] = &[
    "looking for tool",
    "looking for software",
    "anyone recommend",
    "best tool for",
    "what do you use for",
    "alternative to",
];

const PAIN_POINT_QUERIES: &[&str] = &[
    "frustrated with",
    "hate when",
    "struggle with",
    "waste of time",
    "problem with",
    "tired of",
];

const ADVICE_REQUEST_QUERIES: &[&str] = &[
    "how do you",
    "best way to",
    "tips for",
    "advice on",
    "help with",
];

const WILLINGNESS_TO_PAY_QUERIES: &[&str] = &[
    "would pay for",
    "worth paying",
    "budget for",
    "looking for paid",
    "subscription for",
];

/// Search phrases that surface posts of the given intent.
///
/// Intents without a dedicated table search with the solution-request
/// phrases.
#[must_use]
pub fn intent_queries(intent: IntentCategory) -> &'static [&'static str] {
    match intent {
        IntentCategory::PainPoint => PAIN_POINT_QUERIES,
        IntentCategory::AdviceRequest => ADVICE_REQUEST_QUERIES,
        IntentCategory::WillingnessToPay => WILLINGNESS_TO_PAY_QUERIES,
        IntentCategory::SolutionRequest
        | IntentCategory::Idea
        | IntentCategory::SelfPromotion
        | IntentCategory::MoneyTalk
        | IntentCategory::General => SOLUTION_REQUEST_QUERIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_tables() {
        assert_eq!(intent_queries(IntentCategory::PainPoint)[0], "frustrated with");
        assert_eq!(intent_queries(IntentCategory::WillingnessToPay)[0], "would pay for");
        assert_eq!(intent_queries(IntentCategory::AdviceRequest).len(), 5);
    }

    #[test]
    fn intents_without_table_fall_back_to_solution_requests() {
        assert_eq!(
            intent_queries(IntentCategory::MoneyTalk),
            intent_queries(IntentCategory::SolutionRequest)
        );
        assert_eq!(
            intent_queries(IntentCategory::General),
            SOLUTION_REQUEST_QUERIES
        );
    }

    #[test]
    fn every_table_has_at_least_three_queries() {
        for intent in IntentCategory::ALL {
            assert!(intent_queries(intent).len() >= 3, "{intent}");
        }
    }
}
