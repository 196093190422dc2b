use crate::application::read_models::WhyReadModel;
use crate::shared::Result;

/// WhyFormatter port for rendering analysis results
///
/// This port abstracts the rendering logic for different output
/// formats (plain text, JSON).
pub trait WhyFormatter {
    /// Formats the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &WhyReadModel) -> Result<String>;
}
