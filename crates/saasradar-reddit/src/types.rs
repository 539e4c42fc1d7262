//! Serde shapes for Reddit's search listing.
//!
//! Only the fields the collector reads are modeled; everything is optional
//! because removed and quarantined posts omit arbitrary fields.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    pub(crate) data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    #[serde(default)]
    pub(crate) children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Child {
    pub(crate) data: PostData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PostData {
    pub(crate) title: Option<String>,
    pub(crate) selftext: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) subreddit: Option<String>,
    pub(crate) permalink: Option<String>,
    pub(crate) score: Option<i64>,
    pub(crate) num_comments: Option<i64>,
    pub(crate) created_utc: Option<f64>,
}
