//! Wire types for the recommendation service's JSON API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback used when a non-success response body cannot be parsed
/// as an [`ErrorPayload`].
pub const FALLBACK_ERROR_MESSAGE: &str = "unknown server error";

/// One recommended title, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub name: String,
    pub image_url: String,
    pub similarity_score: SimilarityScore,
}

/// A full answer from the recommendation endpoint.
///
/// `input_anime` is the service's echo of the title it matched, which is
/// not necessarily identical to what the user typed. The recommendation
/// order is the service's ranking and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub input_anime: String,
    pub recommendations: Vec<RecommendationResult>,
}

/// Similarity score as reported by the service.
///
/// The service does not commit to a numeric representation; scores arrive
/// both as JSON numbers and as strings. Only the textual form is ever
/// shown, so the value is carried through verbatim either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimilarityScore {
    Number(f64),
    Text(String),
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityScore::Number(value) => write!(f, "{}", value),
            SimilarityScore::Text(value) => f.write_str(value),
        }
    }
}

/// Body of a non-success response.
///
/// The service sends a short `error` title alongside `message`; only the
/// message is surfaced to the user, the title is kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_numeric_and_string_scores() {
        let body = r#"{
            "input_anime": "Naruto",
            "recommendations": [
                { "name": "Bleach", "image_url": "https://cdn.example/bleach.jpg", "similarity_score": 0.8123 },
                { "name": "One Piece", "image_url": "https://cdn.example/op.jpg", "similarity_score": "0.7991" }
            ]
        }"#;

        let response: RecommendationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.input_anime, "Naruto");
        assert_eq!(response.recommendations.len(), 2);
        assert_eq!(
            response.recommendations[0].similarity_score,
            SimilarityScore::Number(0.8123)
        );
        assert_eq!(response.recommendations[0].similarity_score.to_string(), "0.8123");
        assert_eq!(response.recommendations[1].similarity_score.to_string(), "0.7991");
    }

    #[test]
    fn response_allows_empty_recommendations() {
        let body = r#"{ "input_anime": "Naruto", "recommendations": [] }"#;
        let response: RecommendationResponse = serde_json::from_str(body).unwrap();
        assert!(response.recommendations.is_empty());
    }

    #[test]
    fn error_payload_title_is_optional() {
        let with_title: ErrorPayload =
            serde_json::from_str(r#"{ "error": "Anime no encontrado", "message": "not in the database" }"#)
                .unwrap();
        assert_eq!(with_title.error.as_deref(), Some("Anime no encontrado"));
        assert_eq!(with_title.message, "not in the database");

        let bare: ErrorPayload = serde_json::from_str(r#"{ "message": "db down" }"#).unwrap();
        assert_eq!(bare.error, None);
    }
}
