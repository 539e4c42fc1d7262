use serde::Serialize;

use crate::lexicon::{PAIN_SIGNALS, PAYMENT_SIGNALS};

/// Payment and pain phrases found in a piece of text.
///
/// Both lists follow the static declaration order of their phrase tables and
/// never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedSignals {
    pub payment: Vec<&'static str>,
    pub pain: Vec<&'static str>,
}

/// Extract payment and pain signal phrases from text.
#[must_use]
pub fn extract_signals(text: &str) -> ExtractedSignals {
    let lower = text.to_lowercase();
    let matching = |phrases: &'static [&'static str]| -> Vec<&'static str> {
        phrases
            .iter()
            .copied()
            .filter(|phrase| lower.contains(phrase))
            .collect()
    };

    ExtractedSignals {
        payment: matching(PAYMENT_SIGNALS),
        pain: matching(PAIN_SIGNALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_no_signals() {
        let signals = extract_signals("");
        assert!(signals.payment.is_empty());
        assert!(signals.pain.is_empty());
    }

    #[test]
    fn airbnb_payment_example() {
        let signals = extract_signals("I would pay for a tool that manages my Airbnb listings");
        assert!(signals.payment.contains(&"would pay"));
        assert!(signals.payment.contains(&"pay for"));
    }

    #[test]
    fn output_follows_declaration_order_not_text_order() {
        let signals = extract_signals("Premium is expensive and the subscription is worse");
        assert_eq!(signals.payment, vec!["subscription", "expensive", "premium"]);
    }

    #[test]
    fn repeated_phrase_appears_once() {
        let signals = extract_signals("manual manual manual work");
        assert_eq!(signals.pain, vec!["manual"]);
    }

    #[test]
    fn overlapping_phrases_each_match() {
        let signals = extract_signals("Looking for paid options");
        assert_eq!(signals.payment, vec!["looking for paid"]);
        assert_eq!(signals.pain, vec!["looking for"]);
    }
}
