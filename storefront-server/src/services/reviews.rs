//! Customer reviews from the Google Places details API
//!
//! Any failure (no credentials, transport error, non-OK API status such as
//! `REQUEST_DENIED`) degrades to built-in sample reviews. No retries.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::core::Config;
use shared::error::{AppError, ErrorCode};
use shared::models::{Review, ReviewSource, ReviewSummary};

const PLACES_FIELDS: &str = "name,rating,user_ratings_total,reviews";

#[derive(Debug, Error)]
pub enum ReviewsError {
    #[error("Places API credentials not configured")]
    NotConfigured,

    #[error("Places API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Places API returned {status}: {message}")]
    Api { status: String, message: String },
}

/// Places details response (only the fields we read)
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    name: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    #[serde(default)]
    reviews: Vec<PlaceReview>,
}

#[derive(Debug, Deserialize)]
struct PlaceReview {
    author_name: String,
    rating: f64,
    #[serde(default)]
    text: String,
    relative_time_description: Option<String>,
    time: Option<i64>,
    profile_photo_url: Option<String>,
}

impl From<PlaceReview> for Review {
    fn from(r: PlaceReview) -> Self {
        Review {
            author_name: r.author_name,
            rating: r.rating.round().clamp(1.0, 5.0) as u8,
            text: r.text,
            relative_time: r.relative_time_description,
            time: r.time,
            profile_photo_url: r.profile_photo_url,
        }
    }
}

/// Reviews client
#[derive(Debug, Clone)]
pub struct ReviewsService {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    place_id: Option<String>,
}

impl ReviewsService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| {
                AppError::with_message(ErrorCode::ConfigError, format!("HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            api_url: config.places_api_url.clone(),
            api_key: config.places_api_key.clone(),
            place_id: config.places_place_id.clone(),
        })
    }

    /// Live reviews, or the sample set when they cannot be fetched
    pub async fn summary(&self) -> ReviewSummary {
        match self.fetch().await {
            Ok(summary) => summary,
            Err(ReviewsError::NotConfigured) => {
                tracing::debug!("Places API not configured, serving sample reviews");
                sample_reviews()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Reviews unavailable, serving sample reviews");
                sample_reviews()
            }
        }
    }

    async fn fetch(&self) -> Result<ReviewSummary, ReviewsError> {
        let (Some(key), Some(place_id)) = (&self.api_key, &self.place_id) else {
            return Err(ReviewsError::NotConfigured);
        };

        let response: PlacesResponse = self
            .client
            .get(&self.api_url)
            .query(&[
                ("place_id", place_id.as_str()),
                ("fields", PLACES_FIELDS),
                ("key", key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_details(response)
    }
}

fn parse_details(response: PlacesResponse) -> Result<ReviewSummary, ReviewsError> {
    if response.status != "OK" {
        return Err(ReviewsError::Api {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        });
    }
    let result = response.result.ok_or_else(|| ReviewsError::Api {
        status: "OK".into(),
        message: "missing result".into(),
    })?;

    Ok(ReviewSummary {
        place_name: result.name,
        rating: result.rating,
        total_ratings: result.user_ratings_total,
        reviews: result.reviews.into_iter().map(Review::from).collect(),
        source: ReviewSource::Places,
    })
}

/// Built-in reviews shown when live data is unavailable
pub fn sample_reviews() -> ReviewSummary {
    let review = |author: &str, rating: u8, text: &str, when: &str| Review {
        author_name: author.to_string(),
        rating,
        text: text.to_string(),
        relative_time: Some(when.to_string()),
        time: None,
        profile_photo_url: None,
    };
    ReviewSummary {
        place_name: None,
        rating: Some(4.8),
        total_ratings: Some(3),
        reviews: vec![
            review(
                "Maria G.",
                5,
                "The sourdough is the best in town and the staff always remember my order.",
                "a week ago",
            ),
            review(
                "Daniel K.",
                5,
                "Lovely spot for a slow breakfast. Get the cinnamon rolls while they last.",
                "3 weeks ago",
            ),
            review(
                "Priya S.",
                4,
                "Great coffee and friendly service. It gets busy on weekend mornings.",
                "a month ago",
            ),
        ],
        source: ReviewSource::Sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ReviewSummary, ReviewsError> {
        parse_details(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_parse_ok_response() {
        let summary = parse(
            r#"{
                "status": "OK",
                "result": {
                    "name": "Corner Bakery",
                    "rating": 4.6,
                    "user_ratings_total": 212,
                    "reviews": [{
                        "author_name": "Sam",
                        "rating": 5,
                        "text": "Great bread",
                        "relative_time_description": "2 days ago",
                        "time": 1700000000
                    }]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(summary.source, ReviewSource::Places);
        assert_eq!(summary.place_name.as_deref(), Some("Corner Bakery"));
        assert_eq!(summary.total_ratings, Some(212));
        assert_eq!(summary.reviews[0].rating, 5);
        assert_eq!(summary.reviews[0].relative_time.as_deref(), Some("2 days ago"));
    }

    #[test]
    fn test_parse_request_denied() {
        let err = parse(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReviewsError::Api { ref status, .. } if status == "REQUEST_DENIED"));
    }

    #[test]
    fn test_sample_reviews_marked_as_sample() {
        let sample = sample_reviews();
        assert!(sample.is_sample());
        assert!(!sample.reviews.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_service_serves_sample() {
        let service = ReviewsService::new(&Config::default()).unwrap();
        assert!(service.summary().await.is_sample());
    }
}
