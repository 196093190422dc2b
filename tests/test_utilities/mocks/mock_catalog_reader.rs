use std::path::Path;
use uv_why::prelude::*;

/// Mock CatalogReader serving a fixed set of packages
pub struct MockCatalogReader {
    pub specs: Vec<PackageSpec>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            specs: Vec::new(),
            should_fail: true,
        }
    }

    /// Adds a package; dependencies are `(name, requirement)` pairs
    pub fn with_package(mut self, name: &str, version: &str, deps: &[(&str, &str)]) -> Self {
        let edges = deps
            .iter()
            .map(|(dep, req)| DependencyEdge::new(*dep, *req))
            .collect();
        self.specs
            .push(PackageSpec::new(name.to_string(), version.to_string(), edges).unwrap());
        self
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _location: &Path) -> Result<CatalogSnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Ok(CatalogSnapshot::from_specs(self.specs.clone()))
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
