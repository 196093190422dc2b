use super::AnalysisMode;
use crate::shared::error::WhyError;
use crate::shared::Result;
use std::path::PathBuf;

/// WhyRequest - Internal request DTO for the explain-dependency use case
#[derive(Debug, Clone)]
pub struct WhyRequest {
    /// Name of the package to explain
    pub target: String,
    /// Which report to produce
    pub mode: AnalysisMode,
    /// Where the catalog reader should look (project dir or site-packages dir)
    pub catalog_path: PathBuf,
}

impl WhyRequest {
    pub fn new(target: impl Into<String>, mode: AnalysisMode, catalog_path: PathBuf) -> Self {
        Self {
            target: target.into(),
            mode,
            catalog_path,
        }
    }

    pub fn builder() -> WhyRequestBuilder {
        WhyRequestBuilder::default()
    }
}

/// Builder for WhyRequest
///
/// The target is required; the mode defaults to deep chains and the catalog
/// path to the current directory.
#[derive(Debug, Default)]
pub struct WhyRequestBuilder {
    target: Option<String>,
    mode: AnalysisMode,
    catalog_path: Option<PathBuf>,
}

impl WhyRequestBuilder {
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn mode(mut self, mode: AnalysisMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `WhyError::Validation` if no non-blank target was given
    pub fn build(self) -> Result<WhyRequest> {
        let target = self
            .target
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| WhyError::Validation {
                message: "A target package name is required (e.g. uv-why requests)".to_string(),
            })?;

        Ok(WhyRequest {
            target,
            mode: self.mode,
            catalog_path: self.catalog_path.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
