use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Communicative purpose of a post.
///
/// Variant order is significant: classification scans categories in this
/// order, and pattern ranking breaks ties by it (`Ord` follows declaration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    SolutionRequest,
    PainPoint,
    AdviceRequest,
    WillingnessToPay,
    Idea,
    SelfPromotion,
    MoneyTalk,
    General,
}

impl IntentCategory {
    /// Every category, in declaration order.
    pub const ALL: [IntentCategory; 8] = [
        IntentCategory::SolutionRequest,
        IntentCategory::PainPoint,
        IntentCategory::AdviceRequest,
        IntentCategory::WillingnessToPay,
        IntentCategory::Idea,
        IntentCategory::SelfPromotion,
        IntentCategory::MoneyTalk,
        IntentCategory::General,
    ];

    /// Wire name, e.g. `solution_request`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IntentCategory::SolutionRequest => "solution_request",
            IntentCategory::PainPoint => "pain_point",
            IntentCategory::AdviceRequest => "advice_request",
            IntentCategory::WillingnessToPay => "willingness_to_pay",
            IntentCategory::Idea => "idea",
            IntentCategory::SelfPromotion => "self_promotion",
            IntentCategory::MoneyTalk => "money_talk",
            IntentCategory::General => "general",
        }
    }

    /// Human-readable label, e.g. `Solution Request`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IntentCategory::SolutionRequest => "Solution Request",
            IntentCategory::PainPoint => "Pain Point",
            IntentCategory::AdviceRequest => "Advice Request",
            IntentCategory::WillingnessToPay => "Willingness To Pay",
            IntentCategory::Idea => "Idea",
            IntentCategory::SelfPromotion => "Self Promotion",
            IntentCategory::MoneyTalk => "Money Talk",
            IntentCategory::General => "General",
        }
    }

    fn available() -> String {
        IntentCategory::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntentCategory {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        IntentCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ConfigError::UnknownIntent {
                name: s.trim().to_string(),
                available: IntentCategory::available(),
            })
    }
}
