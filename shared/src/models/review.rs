//! Customer reviews shown on the public page

use serde::{Deserialize, Serialize};

/// Where a review summary came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
    /// Live Places API data
    Places,
    /// Built-in sample reviews
    Sample,
}

/// A single review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub author_name: String,
    /// 1-5 stars
    pub rating: u8,
    pub text: String,
    /// "2 weeks ago"
    #[serde(default)]
    pub relative_time: Option<String>,
    /// Seconds since the Unix epoch
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}

/// Response of `GET /api/reviews`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub place_name: Option<String>,
    pub rating: Option<f64>,
    pub total_ratings: Option<u64>,
    pub reviews: Vec<Review>,
    pub source: ReviewSource,
}

impl ReviewSummary {
    pub fn is_sample(&self) -> bool {
        self.source == ReviewSource::Sample
    }
}
