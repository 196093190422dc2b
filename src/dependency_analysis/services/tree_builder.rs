use crate::dependency_analysis::domain::{Chain, DependencyTree, TreeKey};

/// TreeBuilder service folding dependency chains into a shared-prefix tree
///
/// Chains that start with the same `(name, version)` hops share a branch;
/// the first point of divergence opens a new child.
pub struct TreeBuilder;

impl TreeBuilder {
    /// Builds a tree from dependency chains
    ///
    /// A branch keeps the dependency and requirement of the chain that created
    /// it. Both are properties of the package version encoded in the key, so
    /// later chains reaching the same key agree on them.
    pub fn build_tree(chains: &[Chain]) -> DependencyTree {
        let mut tree = DependencyTree::new();
        for chain in chains {
            Self::add_chain(&mut tree, chain);
        }
        tree
    }

    fn add_chain(tree: &mut DependencyTree, chain: &Chain) {
        let mut level = tree;
        for node in chain.nodes() {
            let key = TreeKey::new(node.name(), node.version());
            level = level
                .get_or_insert(key, node.dependency(), node.requirement())
                .children_mut();
        }
    }
}
