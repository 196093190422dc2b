pub mod catalog_snapshot;
pub mod chain;
pub mod dependency_tree;
pub mod package;

pub use catalog_snapshot::CatalogSnapshot;
pub use chain::{Chain, ChainNode, Dependent};
pub use dependency_tree::{DependencyTree, TreeBranch, TreeKey};
pub use package::{names_equal, DependencyEdge, PackageName, PackageSpec, Version};
