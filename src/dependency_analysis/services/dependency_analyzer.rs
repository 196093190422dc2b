use crate::dependency_analysis::domain::{names_equal, Chain, ChainNode, Dependent, PackageSpec};
use crate::ports::outbound::PackageCatalog;
use std::collections::HashSet;

/// DependencyAnalyzer service answering "why is this package here?"
///
/// This service contains pure business logic for dependency graph analysis.
/// It only reads from the catalog it is handed and keeps no state between calls.
pub struct DependencyAnalyzer;

/// Unit of work for the depth-first chain search
///
/// `Emit` items sit on the stack next to `Visit` items so that completed chains
/// come out in the same order a recursive search would produce them.
enum SearchItem {
    Visit {
        package: String,
        /// Exact version to resolve, when the edge or root names one
        version: Option<String>,
        path: Chain,
        visited: Vec<String>,
    },
    Emit(Chain),
}

impl DependencyAnalyzer {
    /// Finds every package that declares a dependency on `target`
    ///
    /// # Arguments
    /// * `catalog` - The package catalog to search
    /// * `target` - Name of the package to explain (matched case-insensitively)
    ///
    /// # Returns
    /// One Dependent per qualifying edge, sorted by dependent name
    pub fn find_direct_dependents<C>(catalog: &C, target: &str) -> Vec<Dependent>
    where
        C: PackageCatalog + ?Sized,
    {
        let mut dependents: Vec<Dependent> = catalog
            .enumerate()
            .flat_map(|spec| {
                spec.dependencies()
                    .iter()
                    .filter(move |edge| names_equal(edge.name(), target))
                    .map(move |edge| Dependent::new(spec.name(), spec.version(), edge.requirement()))
            })
            .collect();

        // Stable: edges of one spec keep their declaration order
        dependents.sort_by(|a, b| a.name().cmp(b.name()));

        tracing::debug!(
            target_package = target,
            count = dependents.len(),
            "found direct dependents"
        );
        dependents
    }

    /// Finds every acyclic dependency chain from any catalog package down to `target`
    ///
    /// Each enumerated package is tried as a root. Chains are deduplicated
    /// structurally and sorted by root name.
    ///
    /// # Arguments
    /// * `catalog` - The package catalog to search
    /// * `target` - Name of the package to explain (matched case-insensitively)
    pub fn find_dependency_chains<C>(catalog: &C, target: &str) -> Vec<Chain>
    where
        C: PackageCatalog + ?Sized,
    {
        let mut chains = Vec::new();
        let mut roots = 0usize;

        for spec in catalog.enumerate() {
            roots += 1;
            chains.extend(Self::search_paths(catalog, spec, target));
        }

        let mut seen = HashSet::with_capacity(chains.len());
        chains.retain(|chain| seen.insert(chain.clone()));
        chains.sort_by(|a, b| Self::root_name(a).cmp(Self::root_name(b)));

        tracing::debug!(
            target_package = target,
            roots,
            count = chains.len(),
            "found dependency chains"
        );
        chains
    }

    fn root_name(chain: &Chain) -> &str {
        chain.root().map(ChainNode::name).unwrap_or_default()
    }

    /// Collects every path from `root` to `target`, in depth-first edge order
    ///
    /// The visited list is per path: sibling branches never see each other's
    /// entries, so diamonds are explored fully while cycles are cut.
    /// Pinned edges resolve to the pinned version of the dependency.
    fn search_paths<C>(catalog: &C, root: &PackageSpec, target: &str) -> Vec<Chain>
    where
        C: PackageCatalog + ?Sized,
    {
        let mut found = Vec::new();
        let mut stack = vec![SearchItem::Visit {
            package: root.name().to_string(),
            version: Some(root.version().to_string()),
            path: Chain::default(),
            visited: Vec::new(),
        }];

        while let Some(item) = stack.pop() {
            let (package, version, path, mut visited) = match item {
                SearchItem::Emit(chain) => {
                    found.push(chain);
                    continue;
                }
                SearchItem::Visit {
                    package,
                    version,
                    path,
                    visited,
                } => (package, version, path, visited),
            };

            if visited.iter().any(|name| name == &package) {
                continue;
            }

            let resolved = match version.as_deref() {
                Some(version) => catalog.lookup_version(&package, version),
                None => catalog.lookup(&package),
            };
            let Some(spec) = resolved else {
                tracing::trace!(package = %package, "dependency not in catalog, pruning branch");
                continue;
            };

            // The catalog may resolve a differently-cased name to an entry already on the path
            if spec.name() != package && visited.iter().any(|name| name == spec.name()) {
                continue;
            }

            visited.push(spec.name().to_string());

            for edge in spec.dependencies().iter().rev() {
                let node = ChainNode::new(
                    spec.name(),
                    spec.version(),
                    edge.name(),
                    edge.requirement(),
                );
                let extended = path.extended(node);

                if names_equal(edge.name(), target) {
                    stack.push(SearchItem::Emit(extended));
                } else {
                    stack.push(SearchItem::Visit {
                        package: edge.name().to_string(),
                        version: edge.pinned_version().map(str::to_string),
                        path: extended,
                        visited: visited.clone(),
                    });
                }
            }
        }

        found
    }
}
