//! uv-why - explain why a package is installed
//!
//! This library answers "which packages pull in X, and through which chains?"
//! for uv projects (`uv.lock`) and installed environments (`site-packages`),
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_analysis`): Package catalog model, reverse
//!   dependency search and chain-to-tree merging
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Catalog readers, formatters and presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use uv_why::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ExplainDependencyUseCase::new(
//!     LockfileCatalogReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = WhyRequest::builder()
//!     .target("urllib3")
//!     .mode(AnalysisMode::Tree)
//!     .catalog_path(".")
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! let model = WhyReadModelBuilder::build(&response);
//! let output = TextFormatter::new(false).format(&model)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{
        LockfileCatalogReader, SitePackagesCatalogReader,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        AnalysisMode, AnalysisOutcome, OutputFormat, WhyRequest, WhyResponse,
    };
    pub use crate::application::read_models::{WhyReadModel, WhyReadModelBuilder};
    pub use crate::application::use_cases::ExplainDependencyUseCase;
    pub use crate::dependency_analysis::domain::{
        CatalogSnapshot, Chain, ChainNode, DependencyEdge, DependencyTree, Dependent, PackageSpec,
        TreeKey,
    };
    pub use crate::dependency_analysis::services::{DependencyAnalyzer, TreeBuilder};
    pub use crate::ports::outbound::{
        CatalogReader, OutputPresenter, PackageCatalog, ProgressReporter, WhyFormatter,
    };
    pub use crate::shared::Result;
}
