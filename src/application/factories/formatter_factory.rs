use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::WhyFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// `colorize` only affects text output; JSON is never colored.
    ///
    /// # Examples
    /// ```
    /// use uv_why::application::dto::OutputFormat;
    /// use uv_why::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, colorize: bool) -> Box<dyn WhyFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(colorize)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}
