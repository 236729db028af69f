//! Renderable model of the results area.
//!
//! The controller never edits previously rendered output; every update
//! replaces the whole results area with one [`ResultsContent`] value.
//! Front-ends decide how to style each variant, but the plain-text
//! [`Display`] rendering defines the information every front-end must
//! preserve: the echoed input title, the 1-based ranks, the poster URLs,
//! the verbatim score text, and the error status codes and messages.

use std::fmt;

use api_client::RecommendationResponse;

/// Shown when the trimmed query is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter the name of an anime.";

/// Shown when a success response carries no recommendations.
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found.";

/// Shown when the service could not be reached or understood at all.
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not reach the recommendation service.";

/// One rendered recommendation: rank, title, poster and score.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// 1-based position in the service's ranking.
    pub rank: usize,
    pub name: String,
    pub image_url: String,
    /// Verbatim textual form of the similarity score.
    pub score: String,
}

/// What the results area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsContent {
    /// Nothing rendered; the cleared state at the start of an invocation.
    Blank,
    /// Local validation failure: the query was empty after trimming.
    EmptyQuery,
    /// The service answered with a non-success status.
    HttpError { status: u16, message: String },
    /// The request never completed or its payload was undecodable.
    ConnectionError,
    /// A successful answer, ranked and ready to display.
    Recommendations { input_anime: String, cards: Vec<Card> },
}

impl ResultsContent {
    /// Build display content from a success response, preserving the
    /// service's ranking as 1-based card ranks.
    pub fn from_response(response: RecommendationResponse) -> Self {
        let cards = response
            .recommendations
            .into_iter()
            .enumerate()
            .map(|(index, result)| Card {
                rank: index + 1,
                name: result.name,
                image_url: result.image_url,
                score: result.similarity_score.to_string(),
            })
            .collect();
        ResultsContent::Recommendations {
            input_anime: response.input_anime,
            cards,
        }
    }
}

impl fmt::Display for ResultsContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultsContent::Blank => Ok(()),
            ResultsContent::EmptyQuery => f.write_str(EMPTY_QUERY_MESSAGE),
            ResultsContent::HttpError { status, message } => {
                write!(f, "Error ({}): {}", status, message)
            }
            ResultsContent::ConnectionError => f.write_str(CONNECTION_ERROR_MESSAGE),
            ResultsContent::Recommendations { input_anime, cards } => {
                writeln!(f, "Recommendations similar to {}:", input_anime)?;
                if cards.is_empty() {
                    return f.write_str(NO_RECOMMENDATIONS_MESSAGE);
                }
                for card in cards {
                    writeln!(f, "{}. {} [similarity: {}]", card.rank, card.name, card.score)?;
                    writeln!(f, "   {}", card.image_url)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::{RecommendationResult, SimilarityScore};

    fn sample_response() -> RecommendationResponse {
        RecommendationResponse {
            input_anime: "Naruto".to_string(),
            recommendations: vec![
                RecommendationResult {
                    name: "Bleach".to_string(),
                    image_url: "https://cdn.example/bleach.jpg".to_string(),
                    similarity_score: SimilarityScore::Number(0.81),
                },
                RecommendationResult {
                    name: "One Piece".to_string(),
                    image_url: "https://cdn.example/op.jpg".to_string(),
                    similarity_score: SimilarityScore::Text("0.7991".to_string()),
                },
            ],
        }
    }

    #[test]
    fn from_response_preserves_order_with_one_based_ranks() {
        let content = ResultsContent::from_response(sample_response());
        match &content {
            ResultsContent::Recommendations { input_anime, cards } => {
                assert_eq!(input_anime, "Naruto");
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].rank, 1);
                assert_eq!(cards[0].name, "Bleach");
                assert_eq!(cards[0].score, "0.81");
                assert_eq!(cards[1].rank, 2);
                assert_eq!(cards[1].score, "0.7991");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn rendering_lists_every_card() {
        let text = ResultsContent::from_response(sample_response()).to_string();
        assert!(text.contains("Recommendations similar to Naruto:"));
        assert!(text.contains("1. Bleach [similarity: 0.81]"));
        assert!(text.contains("2. One Piece [similarity: 0.7991]"));
        assert!(text.contains("https://cdn.example/op.jpg"));
    }

    #[test]
    fn empty_response_renders_notice_instead_of_cards() {
        let content = ResultsContent::from_response(RecommendationResponse {
            input_anime: "Naruto".to_string(),
            recommendations: vec![],
        });
        let text = content.to_string();
        assert!(text.contains(NO_RECOMMENDATIONS_MESSAGE));
        assert!(!text.contains("1."));
    }

    #[test]
    fn error_rendering_includes_status_and_message() {
        let text = ResultsContent::HttpError {
            status: 500,
            message: "db down".to_string(),
        }
        .to_string();
        assert!(text.contains("500"));
        assert!(text.contains("db down"));
    }

    #[test]
    fn blank_renders_to_nothing() {
        assert_eq!(ResultsContent::Blank.to_string(), "");
    }
}
