//! Terminal implementation of the controller's display surface.

use colored::Colorize;

use controller::{
    ResultsContent, Surface, CONNECTION_ERROR_MESSAGE, EMPTY_QUERY_MESSAGE,
    NO_RECOMMENDATIONS_MESSAGE,
};

/// Renders results to stdout and progress to stderr.
///
/// The query "input field" is the title parsed from the command line. A
/// terminal cannot retract output, so hiding the indicator is a no-op;
/// showing it prints a fetch notice.
pub struct TerminalSurface {
    query: String,
}

impl TerminalSurface {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Surface for TerminalSurface {
    fn query_text(&self) -> String {
        self.query.clone()
    }

    fn replace_results(&self, content: ResultsContent) {
        match content {
            ResultsContent::Blank => {}
            ResultsContent::EmptyQuery => {
                println!("{}", EMPTY_QUERY_MESSAGE.yellow());
            }
            ResultsContent::HttpError { status, message } => {
                println!("{}", format!("Error ({}): {}", status, message).red());
            }
            ResultsContent::ConnectionError => {
                println!("{}", CONNECTION_ERROR_MESSAGE.red());
            }
            ResultsContent::Recommendations { input_anime, cards } => {
                println!(
                    "{}",
                    format!("Recommendations similar to {}:", input_anime)
                        .bold()
                        .blue()
                );
                if cards.is_empty() {
                    println!("{}", NO_RECOMMENDATIONS_MESSAGE);
                    return;
                }
                for card in cards {
                    println!(
                        "{}. {} {}",
                        card.rank.to_string().green(),
                        card.name,
                        format!("[similarity: {}]", card.score).cyan()
                    );
                    println!("   {}", card.image_url.dimmed());
                }
            }
        }
    }

    fn set_indicator(&self, visible: bool) {
        if visible {
            eprintln!("{}", "Fetching recommendations...".dimmed());
        }
    }
}
