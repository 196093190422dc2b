use crate::dependency_analysis::domain::CatalogSnapshot;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading a package catalog from disk
///
/// This port abstracts where package metadata comes from (a uv.lock file,
/// an installed site-packages directory, ...).
pub trait CatalogReader {
    /// Reads every package found at `location` into an immutable snapshot
    ///
    /// # Arguments
    /// * `location` - Project directory or environment directory, depending on the adapter
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog source does not exist
    /// - The source cannot be read or parsed
    fn read_catalog(&self, location: &Path) -> Result<CatalogSnapshot>;

    /// Short human-readable name of the source, used in progress messages
    fn source_name(&self) -> &'static str;
}
