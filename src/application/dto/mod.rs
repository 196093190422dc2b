/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_mode;
mod output_format;
mod why_request;
mod why_response;

pub use analysis_mode::AnalysisMode;
pub use output_format::OutputFormat;
pub use why_request::{WhyRequest, WhyRequestBuilder};
pub use why_response::{AnalysisOutcome, WhyResponse};
