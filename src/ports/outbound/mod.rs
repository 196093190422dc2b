/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package catalogs, console, file system).
pub mod catalog_reader;
pub mod formatter;
pub mod output_presenter;
pub mod package_catalog;
pub mod progress_reporter;

pub use catalog_reader::CatalogReader;
pub use formatter::WhyFormatter;
pub use output_presenter::OutputPresenter;
pub use package_catalog::PackageCatalog;
pub use progress_reporter::ProgressReporter;
