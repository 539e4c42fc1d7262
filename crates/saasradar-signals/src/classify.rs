use saasradar_core::IntentCategory;

use crate::lexicon::INTENT_PHRASES;

/// Classify text into intent categories.
///
/// Returns categories in declaration order, each at most once. Falls back to
/// `[General]` when no phrase matches, so the result is never empty.
#[must_use]
pub fn classify(text: &str) -> Vec<IntentCategory> {
    let lower = text.to_lowercase();

    let intents: Vec<IntentCategory> = INTENT_PHRASES
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
        .map(|(category, _)| *category)
        .collect();

    if intents.is_empty() {
        vec![IntentCategory::General]
    } else {
        intents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_general() {
        assert_eq!(classify(""), vec![IntentCategory::General]);
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(
            classify("the quick brown fox jumps over the lazy dog"),
            vec![IntentCategory::General]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            classify("ANYONE KNOW a good invoicing app?"),
            vec![IntentCategory::SolutionRequest]
        );
    }

    #[test]
    fn airbnb_payment_example() {
        let intents = classify("I would pay for a tool that manages my Airbnb listings");
        assert!(intents.contains(&IntentCategory::SolutionRequest));
        assert!(intents.contains(&IntentCategory::WillingnessToPay));
        assert!(!intents.contains(&IntentCategory::General));
    }

    #[test]
    fn multiple_categories_keep_declaration_order() {
        let intents = classify("Frustrated with pricing, looking for an alternative to Stripe");
        assert_eq!(
            intents,
            vec![
                IntentCategory::SolutionRequest,
                IntentCategory::PainPoint,
                IntentCategory::WillingnessToPay,
            ]
        );
    }

    #[test]
    fn category_reported_once_despite_many_phrases() {
        let intents = classify("hate it, sucks, terrible, awful nightmare");
        assert_eq!(intents, vec![IntentCategory::PainPoint]);
    }

    #[test]
    fn substring_matching_is_literal() {
        // "prepay for" contains "pay for"
        let intents = classify("we prepay for hosting");
        assert!(intents.contains(&IntentCategory::WillingnessToPay));
    }

    #[test]
    fn general_present_only_when_nothing_else_matched() {
        for text in ["", "hello", "I built a thing", "how to cook", "mrr update"] {
            let intents = classify(text);
            assert!(!intents.is_empty());
            let has_general = intents.contains(&IntentCategory::General);
            assert_eq!(has_general, intents.len() == 1 && intents[0] == IntentCategory::General);
        }
    }
}
