//! Request controller for the anime recommendation lookup.
//!
//! This crate owns the client-side lifecycle around a recommendation
//! query:
//! - **controller**: the request/response/render cycle and its failure
//!   boundary
//! - **surface**: the injected display abstraction (query input, results
//!   area, loading indicator)
//! - **content**: the renderable model of the results area
//!
//! The network itself lives in the `api-client` crate behind the
//! `RecommendationSource` trait, so the controller can be exercised
//! against a scripted source without a rendering environment or a
//! service.

pub mod content;
pub mod controller;
pub mod surface;

// Re-export main types
pub use content::{
    Card, ResultsContent, CONNECTION_ERROR_MESSAGE, EMPTY_QUERY_MESSAGE,
    NO_RECOMMENDATIONS_MESSAGE,
};
pub use controller::RequestController;
pub use surface::Surface;
