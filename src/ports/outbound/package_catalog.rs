use crate::dependency_analysis::domain::{names_equal, PackageSpec};

/// PackageCatalog port giving read-only access to known packages
///
/// The analyzer depends only on this capability, so it can run against an
/// installed environment, a lockfile or an in-memory test double alike.
pub trait PackageCatalog {
    /// Iterates over every package the catalog knows about
    ///
    /// Order carries no meaning for the analyzer, which sorts its own output.
    fn enumerate(&self) -> Box<dyn Iterator<Item = &PackageSpec> + '_>;

    /// Looks up a package by name
    ///
    /// # Returns
    /// `None` when the package is not in the catalog
    fn lookup(&self, name: &str) -> Option<&PackageSpec>;

    /// Looks up one specific version of a package
    ///
    /// Falls back to `lookup` when no entry carries that version, so a stale
    /// pin still resolves to the package by name.
    fn lookup_version(&self, name: &str, version: &str) -> Option<&PackageSpec> {
        self.enumerate()
            .find(|spec| names_equal(spec.name(), name) && spec.version() == version)
            .or_else(|| self.lookup(name))
    }
}
