//! The display seam between the controller and its environment.

use crate::content::ResultsContent;

/// The controller's only view of the page it drives.
///
/// The capability set is deliberately minimal: read the query input,
/// replace the results area wholesale, toggle the loading indicator.
/// Methods take `&self` so one surface can be shared by overlapping
/// invocations; implementations use interior mutability where they keep
/// state.
pub trait Surface: Send + Sync {
    /// Current value of the query input field.
    fn query_text(&self) -> String;

    /// Replace the entire results area with `content`.
    fn replace_results(&self, content: ResultsContent);

    /// Show or hide the loading indicator.
    fn set_indicator(&self, visible: bool);
}
