use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identity of a tree branch: one package version
///
/// Kept as a structured pair so names containing parentheses stay unambiguous;
/// the `"name (version)"` text form only appears when displaying or serializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeKey {
    name: String,
    version: String,
}

impl TreeKey {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parses the `"name (version)"` form back into a key
    pub fn parse(text: &str) -> Option<Self> {
        let (name, version) = text.strip_suffix(')')?.rsplit_once(" (")?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self::new(name, version))
    }
}

impl fmt::Display for TreeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}

/// One branch of a dependency tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeBranch {
    key: TreeKey,
    dependency: String,
    requirement: String,
    children: DependencyTree,
}

impl TreeBranch {
    pub fn new(key: TreeKey, dependency: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            key,
            dependency: dependency.into(),
            requirement: requirement.into(),
            children: DependencyTree::default(),
        }
    }

    pub fn key(&self) -> &TreeKey {
        &self.key
    }

    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn children(&self) -> &DependencyTree {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut DependencyTree {
        &mut self.children
    }

    /// A branch without children is where the target was reached
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Shared-prefix tree of dependency chains, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    branches: Vec<TreeBranch>,
}

impl DependencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn branches(&self) -> &[TreeBranch] {
        &self.branches
    }

    pub fn get(&self, key: &TreeKey) -> Option<&TreeBranch> {
        self.branches.iter().find(|branch| &branch.key == key)
    }

    /// Returns the branch for `key`, inserting it with the given edge data if absent.
    ///
    /// An existing branch keeps the edge data it was first inserted with.
    pub fn get_or_insert(
        &mut self,
        key: TreeKey,
        dependency: &str,
        requirement: &str,
    ) -> &mut TreeBranch {
        let position = match self.branches.iter().position(|branch| branch.key == key) {
            Some(position) => position,
            None => {
                self.branches
                    .push(TreeBranch::new(key, dependency, requirement));
                self.branches.len() - 1
            }
        };
        &mut self.branches[position]
    }
}

#[derive(Serialize)]
struct BranchBodyRef<'a> {
    dependency: &'a str,
    requirement: &'a str,
    children: &'a DependencyTree,
}

#[derive(Deserialize)]
struct BranchBody {
    dependency: String,
    requirement: String,
    #[serde(default)]
    children: DependencyTree,
}

impl Serialize for DependencyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.branches.len()))?;
        for branch in &self.branches {
            map.serialize_entry(
                &branch.key.to_string(),
                &BranchBodyRef {
                    dependency: &branch.dependency,
                    requirement: &branch.requirement,
                    children: &branch.children,
                },
            )?;
        }
        map.end()
    }
}

struct DependencyTreeVisitor;

impl<'de> Visitor<'de> for DependencyTreeVisitor {
    type Value = DependencyTree;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map keyed by \"name (version)\"")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut tree = DependencyTree::default();
        while let Some((raw_key, body)) = access.next_entry::<String, BranchBody>()? {
            let key = TreeKey::parse(&raw_key)
                .ok_or_else(|| de::Error::custom(format!("invalid tree key '{}'", raw_key)))?;
            tree.branches.push(TreeBranch {
                key,
                dependency: body.dependency,
                requirement: body.requirement,
                children: body.children,
            });
        }
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for DependencyTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DependencyTreeVisitor)
    }
}
