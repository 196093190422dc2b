use crate::application::dto::{AnalysisMode, AnalysisOutcome, WhyRequest, WhyResponse};
use crate::dependency_analysis::domain::{names_equal, CatalogSnapshot};
use crate::dependency_analysis::services::DependencyAnalyzer;
use crate::ports::outbound::{CatalogReader, PackageCatalog, ProgressReporter};
use crate::shared::error::WhyError;
use crate::shared::Result;

/// ExplainDependencyUseCase - Core use case answering "why is this package here?"
///
/// This use case orchestrates catalog loading and dependency analysis using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExplainDependencyUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> ExplainDependencyUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    /// Creates a new ExplainDependencyUseCase with injected dependencies
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `request` - Target package, mode and catalog location
    ///
    /// # Returns
    /// WhyResponse holding the direct dependents or the dependency chains
    ///
    /// # Errors
    /// Returns an error if the target is blank or the catalog cannot be loaded.
    /// Finding nothing is not an error.
    pub fn execute(&self, request: WhyRequest) -> Result<WhyResponse> {
        // Step 1: Validate the request
        let target = Self::validate_target(&request.target)?;

        // Step 2: Load the catalog snapshot
        let catalog = self.load_catalog(&request)?;

        // Step 3: Warn when the target itself is unknown
        self.warn_if_target_missing(&catalog, &target);

        // Step 4: Run the analysis for the requested mode
        let outcome = self.analyze(&catalog, &target, request.mode);

        Ok(WhyResponse::new(target, request.mode, outcome))
    }

    fn validate_target(target: &str) -> Result<String> {
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(WhyError::Validation {
                message: "A target package name is required (e.g. uv-why requests)".to_string(),
            }
            .into());
        }
        Ok(trimmed.to_string())
    }

    /// Reads the catalog, reporting progress
    fn load_catalog(&self, request: &WhyRequest) -> Result<CatalogSnapshot> {
        self.progress_reporter.report(&format!(
            "📖 Loading package catalog ({}) from: {}",
            self.catalog_reader.source_name(),
            request.catalog_path.display()
        ));

        let catalog = self.catalog_reader.read_catalog(&request.catalog_path)?;

        self.progress_reporter
            .report(&format!("✅ Loaded {} package(s)", catalog.len()));
        tracing::info!(
            packages = catalog.len(),
            source = self.catalog_reader.source_name(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Dependents are still searched afterwards: an edge may name a package
    /// that is declared but not present.
    fn warn_if_target_missing(&self, catalog: &CatalogSnapshot, target: &str) {
        let present = catalog.enumerate().any(|spec| names_equal(spec.name(), target));
        if !present {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: '{}' is not present in the package catalog.",
                target
            ));
        }
    }

    fn analyze(&self, catalog: &CatalogSnapshot, target: &str, mode: AnalysisMode) -> AnalysisOutcome {
        self.progress_reporter.report(&format!(
            "🔍 Searching for packages that depend on {} ({} mode)...",
            target, mode
        ));

        let outcome = if mode.needs_chains() {
            AnalysisOutcome::Chains(DependencyAnalyzer::find_dependency_chains(catalog, target))
        } else {
            AnalysisOutcome::Dependents(DependencyAnalyzer::find_direct_dependents(catalog, target))
        };

        let noun = match outcome {
            AnalysisOutcome::Dependents(_) => "direct dependent(s)",
            AnalysisOutcome::Chains(_) => "dependency chain(s)",
        };
        self.progress_reporter
            .report_completion(&format!("✅ Found {} {}", outcome.len(), noun));
        if outcome.is_empty() {
            tracing::info!(target_package = target, mode = %mode, "nothing depends on target");
        }

        outcome
    }
}
