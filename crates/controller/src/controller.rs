//! # Recommendation Request Controller
//!
//! This module coordinates the whole request/response/render cycle:
//! 1. Read and trim the query from the surface
//! 2. Clear the results area
//! 3. Validate locally (empty query never reaches the network)
//! 4. Show the indicator and issue exactly one request
//! 5. Hide the indicator on every completion path
//! 6. Drop responses that a newer invocation has superseded
//! 7. Render the outcome (results, HTTP error, or connectivity failure)
//!
//! The controller is the top-level failure boundary: every failure class
//! ends as rendered content, nothing propagates and nothing is retried.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use api_client::{ApiClientError, RecommendationSource};

use crate::content::ResultsContent;
use crate::surface::Surface;

/// Drives one query input, one results area and one loading indicator
/// against a recommendation source.
///
/// Cheap to clone; clones share the request sequence, so overlapping
/// invocations agree on which request is the latest.
#[derive(Clone)]
pub struct RequestController {
    source: Arc<dyn RecommendationSource>,
    surface: Arc<dyn Surface>,
    seq: Arc<AtomicU64>,
}

impl RequestController {
    /// Create a controller over an injected source and surface.
    pub fn new(source: Arc<dyn RecommendationSource>, surface: Arc<dyn Surface>) -> Self {
        Self {
            source,
            surface,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run one full request cycle for the surface's current query text.
    ///
    /// Always settles the display: on return the indicator is hidden and
    /// the results area shows the outcome of the latest issued request.
    pub async fn request_recommendations(&self) {
        let query = self.surface.query_text().trim().to_string();

        // Idempotent reset so repeated invocations never accumulate
        // stale content.
        self.surface.replace_results(ResultsContent::Blank);

        if query.is_empty() {
            debug!("empty query, skipping request");
            self.surface.replace_results(ResultsContent::EmptyQuery);
            return;
        }

        // Each issued request takes the next token; only the holder of
        // the latest token may render its response.
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        self.surface.set_indicator(true);
        info!("requesting recommendations for '{}'", query);
        let started = Instant::now();

        let outcome = self.source.recommendations(&query).await;

        // The indicator must never stay stuck visible, whatever the
        // outcome and whether or not this response is stale.
        self.surface.set_indicator(false);

        if self.seq.load(Ordering::SeqCst) != token {
            debug!("discarding stale response for '{}'", query);
            return;
        }

        match outcome {
            Ok(response) => {
                info!(
                    "received {} recommendations for '{}' in {:.2?}",
                    response.recommendations.len(),
                    query,
                    started.elapsed()
                );
                self.surface
                    .replace_results(ResultsContent::from_response(response));
            }
            Err(ApiClientError::Status { status, message }) => {
                warn!("service rejected '{}' with HTTP {}: {}", query, status, message);
                self.surface
                    .replace_results(ResultsContent::HttpError { status, message });
            }
            Err(err) => {
                error!("request for '{}' failed: {}", query, err);
                self.surface.replace_results(ResultsContent::ConnectionError);
            }
        }
    }
}
