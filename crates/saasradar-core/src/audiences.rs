use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::ConfigError;

/// A named group of subreddits plus contextual keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    pub key: String,
    pub name: String,
    pub subreddits: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AudiencesFile {
    audiences: Vec<Audience>,
}

type BuiltinAudience = (
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

const BUILTIN_AUDIENCES: &[BuiltinAudience] = &[
    (
        "airbnb_hosts",
        "AirBnB Hosts",
        &[
            "airbnb_hosts",
            "AirBnBHosts",
            "ShortTermRentals",
            "vrbo",
            "vacation_rentals",
        ],
        &["airbnb", "host", "guest", "property", "listing", "booking"],
    ),
    (
        "saas_founders",
        "SaaS Founders",
        &["SaaS", "startups", "Entrepreneur", "indiehackers", "microsaas"],
        &["saas", "startup", "mrr", "churn", "pricing", "customers"],
    ),
    (
        "freelancers",
        "Freelancers & Consultants",
        &["freelance", "Upwork", "fiverr", "consulting", "digitalnomad"],
        &["client", "rate", "project", "contract", "invoice"],
    ),
    (
        "ecommerce",
        "E-commerce Sellers",
        &[
            "ecommerce",
            "FulfillmentByAmazon",
            "shopify",
            "dropship",
            "AmazonSeller",
        ],
        &["store", "product", "inventory", "shipping", "sales"],
    ),
    (
        "content_creators",
        "Content Creators",
        &[
            "NewTubers",
            "youtubegaming",
            "Twitch",
            "podcasting",
            "content_creators",
        ],
        &["video", "content", "audience", "monetize", "sponsor"],
    ),
    (
        "real_estate",
        "Real Estate Investors",
        &[
            "realestateinvesting",
            "RealEstate",
            "Landlord",
            "CommercialRealEstate",
        ],
        &["property", "tenant", "rent", "investment", "roi"],
    ),
    (
        "agencies",
        "Marketing Agencies",
        &["marketing", "digital_marketing", "SEO", "PPC", "socialmedia"],
        &["client", "campaign", "report", "agency", "lead"],
    ),
    (
        "developers",
        "Software Developers",
        &["webdev", "programming", "cscareerquestions", "devops", "sysadmin"],
        &["code", "deploy", "api", "tool", "workflow"],
    ),
];

/// Immutable lookup table of audiences, in declaration order.
#[derive(Debug, Clone)]
pub struct AudienceRegistry {
    audiences: Vec<Audience>,
}

impl AudienceRegistry {
    /// The curated audiences shipped with the binary.
    #[must_use]
    pub fn builtin() -> Self {
        let audiences = BUILTIN_AUDIENCES
            .iter()
            .map(|(key, name, subreddits, keywords)| Audience {
                key: (*key).to_string(),
                name: (*name).to_string(),
                subreddits: subreddits.iter().map(|s| (*s).to_string()).collect(),
                keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            })
            .collect();
        Self { audiences }
    }

    /// Load and validate an audience registry from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::AudiencesFileIo {
                path: path.display().to_string(),
                source: e,
            })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate an audience registry from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text cannot be parsed or fails validation.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let file: AudiencesFile =
            serde_yaml::from_str(content).map_err(ConfigError::AudiencesFileParse)?;
        validate_audiences(&file.audiences)?;
        Ok(Self {
            audiences: file.audiences,
        })
    }

    /// The registry selected by `SAASRADAR_AUDIENCES_PATH`, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a configured file cannot be loaded.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        match &config.audiences_path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Look up an audience by key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownAudience` listing every available key.
    pub fn get(&self, key: &str) -> Result<&Audience, ConfigError> {
        self.audiences
            .iter()
            .find(|a| a.key == key)
            .ok_or_else(|| ConfigError::UnknownAudience {
                key: key.to_string(),
                available: self.keys().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.audiences.iter().map(|a| a.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Audience> {
        self.audiences.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.audiences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.audiences.is_empty()
    }
}

fn validate_audiences(audiences: &[Audience]) -> Result<(), ConfigError> {
    if audiences.is_empty() {
        return Err(ConfigError::Validation(
            "audiences file must define at least one audience".to_string(),
        ));
    }

    let mut seen_keys = HashSet::new();

    for audience in audiences {
        if audience.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "audience key must be non-empty".to_string(),
            ));
        }

        if audience.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "audience '{}' has an empty name",
                audience.key
            )));
        }

        if audience.subreddits.iter().all(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "audience '{}' must list at least one subreddit",
                audience.key
            )));
        }

        if !seen_keys.insert(audience.key.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate audience key: '{}'",
                audience.key
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "audiences_test.rs"]
mod tests;
