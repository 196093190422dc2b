mod dependency_analyzer;
mod tree_builder;

pub use dependency_analyzer::DependencyAnalyzer;
pub use tree_builder::TreeBuilder;
