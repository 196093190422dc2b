use super::package::PackageSpec;
use crate::ports::outbound::PackageCatalog;
use std::collections::HashMap;

/// CatalogSnapshot aggregate holding every known package at one point in time
///
/// Catalog readers build a snapshot once, before any analysis runs, so the
/// analyzer always works against an immutable view.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    specs: Vec<PackageSpec>,
    exact_index: HashMap<String, usize>,
    folded_index: HashMap<String, usize>,
    version_index: HashMap<(String, String), usize>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, keeping `specs` in the given enumeration order.
    ///
    /// When several specs share a name, the first one answers lookups.
    pub fn from_specs(specs: Vec<PackageSpec>) -> Self {
        let mut exact_index = HashMap::with_capacity(specs.len());
        let mut folded_index = HashMap::with_capacity(specs.len());
        let mut version_index = HashMap::with_capacity(specs.len());

        for (position, spec) in specs.iter().enumerate() {
            exact_index
                .entry(spec.name().to_string())
                .or_insert(position);
            folded_index
                .entry(spec.name().to_lowercase())
                .or_insert(position);
            version_index
                .entry((spec.name().to_lowercase(), spec.version().to_string()))
                .or_insert(position);
        }

        Self {
            specs,
            exact_index,
            folded_index,
            version_index,
        }
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl PackageCatalog for CatalogSnapshot {
    fn enumerate(&self) -> Box<dyn Iterator<Item = &PackageSpec> + '_> {
        Box::new(self.specs.iter())
    }

    fn lookup(&self, name: &str) -> Option<&PackageSpec> {
        self.exact_index
            .get(name)
            .or_else(|| self.folded_index.get(&name.to_lowercase()))
            .map(|&position| &self.specs[position])
    }

    fn lookup_version(&self, name: &str, version: &str) -> Option<&PackageSpec> {
        self.version_index
            .get(&(name.to_lowercase(), version.to_string()))
            .map(|&position| &self.specs[position])
            .or_else(|| self.lookup(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_analysis::domain::DependencyEdge;

    fn spec(name: &str, version: &str) -> PackageSpec {
        PackageSpec::new(name.to_string(), version.to_string(), vec![]).unwrap()
    }

    #[test]
    fn test_enumerate_preserves_order() {
        let snapshot = CatalogSnapshot::from_specs(vec![
            spec("zeta", "1.0"),
            spec("alpha", "2.0"),
            spec("mid", "3.0"),
        ]);

        let names: Vec<&str> = snapshot.enumerate().map(|s| s.name()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_lookup_exact_and_case_insensitive() {
        let snapshot = CatalogSnapshot::from_specs(vec![spec("PyYAML", "6.0.1")]);

        assert_eq!(snapshot.lookup("PyYAML").unwrap().version(), "6.0.1");
        assert_eq!(snapshot.lookup("pyyaml").unwrap().name(), "PyYAML");
        assert!(snapshot.lookup("ghost").is_none());
    }

    #[test]
    fn test_lookup_prefers_first_registered_version() {
        let older = PackageSpec::new(
            "numpy".to_string(),
            "1.26.4".to_string(),
            vec![DependencyEdge::new("old-dep", "*")],
        )
        .unwrap();
        let snapshot = CatalogSnapshot::from_specs(vec![older, spec("numpy", "2.0.0")]);

        assert_eq!(snapshot.lookup("numpy").unwrap().version(), "1.26.4");
        assert_eq!(snapshot.enumerate().count(), 2);
    }

    #[test]
    fn test_lookup_version_selects_pinned_entry() {
        let snapshot = CatalogSnapshot::from_specs(vec![
            spec("numpy", "1.26.4"),
            spec("numpy", "2.0.0"),
        ]);

        assert_eq!(snapshot.lookup_version("NumPy", "2.0.0").unwrap().version(), "2.0.0");
        assert_eq!(snapshot.lookup_version("numpy", "1.26.4").unwrap().version(), "1.26.4");
        // Unknown pins fall back to the name lookup
        assert_eq!(snapshot.lookup_version("numpy", "0.1").unwrap().version(), "1.26.4");
        assert!(snapshot.lookup_version("ghost", "1.0").is_none());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = CatalogSnapshot::default();
        assert!(snapshot.is_empty());
        assert!(snapshot.lookup("anything").is_none());
        assert_eq!(snapshot.enumerate().count(), 0);
    }
}
