use crate::application::read_models::{RootTreeView, WhyReadModel};
use crate::dependency_analysis::domain::{Chain, Dependent, DependencyTree};
use crate::ports::outbound::WhyFormatter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Style};

const TIP: &str = "Use --direct for direct dependencies only or --tree for a visual tree";

/// TextFormatter adapter for human-readable terminal output
///
/// Colors are applied through owo-colors only when `colorize` is set, so the
/// same formatter produces plain text for files and pipes.
pub struct TextFormatter {
    colorize: bool,
}

impl TextFormatter {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.colorize {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn target(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }

    fn package(&self, text: &str) -> String {
        self.paint(text, Style::new().blue())
    }

    fn label(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    fn no_match(&self, target: &str) -> String {
        format!(
            "No packages depend on {}\n",
            self.paint(target, Style::new().yellow())
        )
    }

    fn format_direct(&self, target: &str, dependents: &[Dependent]) -> String {
        let mut output = String::new();
        output.push_str(&format!("Packages that depend on {}:\n\n", self.target(target)));
        for dependent in dependents {
            output.push_str(&format!(
                "  {} ({}) requires {} {}\n",
                self.package(dependent.name()),
                dependent.version(),
                target,
                dependent.requirement()
            ));
        }
        output.push_str(&format!(
            "\n{} {} package(s)\n",
            self.label("Total:"),
            dependents.len()
        ));
        output
    }

    fn format_deep(&self, target: &str, chains: &[Chain], root_count: usize) -> String {
        let arrow = format!(" {} ", self.paint("=>", Style::new().white()));
        let mut output = String::new();
        output.push_str(&format!(
            "Dependency chains leading to {}:\n\n",
            self.target(target)
        ));

        for chain in chains {
            let path: Vec<String> = chain
                .nodes()
                .iter()
                .map(|node| self.package(node.name()))
                .chain(std::iter::once(self.target(target)))
                .collect();
            output.push_str(&format!("  {}\n", path.join(&arrow)));

            for (idx, node) in chain.nodes().iter().enumerate() {
                output.push_str(&format!(
                    "{}└─ {} ({}) requires {} {}\n",
                    "    ".repeat(idx + 1),
                    node.name(),
                    node.version(),
                    node.dependency(),
                    node.requirement()
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {} root package(s) depend on {}\n",
            self.label("Total:"),
            root_count,
            target
        ));
        output.push_str(&format!("Found {} dependency chain(s)\n", chains.len()));
        output.push_str(&format!(
            "\n{} {}\n",
            self.paint("Tip:", Style::new().yellow()),
            TIP
        ));
        output
    }

    fn format_tree(&self, target: &str, roots: &[RootTreeView]) -> String {
        let mut output = String::new();
        output.push_str(&format!("Dependency tree for {}:\n\n", self.target(target)));
        for root in roots {
            output.push_str(&format!("{} ({})\n", self.package(&root.name), root.version));
            self.write_branches(&mut output, &root.tree, "", target, 0);
            output.push('\n');
        }
        output.push_str(&format!(
            "{} {} root package(s) depend on {}\n",
            self.label("Total:"),
            roots.len(),
            target
        ));
        output
    }

    /// Draws one tree level; the top level shows only the edge because the
    /// root line above already names the package
    fn write_branches(
        &self,
        output: &mut String,
        tree: &DependencyTree,
        prefix: &str,
        target: &str,
        depth: usize,
    ) {
        let count = tree.len();
        for (index, branch) in tree.branches().iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = if is_last { "└──" } else { "├──" };
            let line = if depth == 0 {
                format!("{} {}", branch.dependency(), branch.requirement())
            } else {
                format!(
                    "{} requires {} {}",
                    branch.key(),
                    branch.dependency(),
                    branch.requirement()
                )
            };
            output.push_str(&format!("{}{} {}\n", prefix, connector, line));

            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            if branch.is_leaf() {
                output.push_str(&format!(
                    "{}└── {} {}\n",
                    child_prefix,
                    self.target(target),
                    self.paint("✓", Style::new().green())
                ));
            } else {
                self.write_branches(output, branch.children(), &child_prefix, target, depth + 1);
            }
        }
    }
}

impl WhyFormatter for TextFormatter {
    fn format(&self, model: &WhyReadModel) -> Result<String> {
        if model.is_empty() {
            return Ok(self.no_match(model.target()));
        }

        Ok(match model {
            WhyReadModel::Direct { target, dependents } => self.format_direct(target, dependents),
            WhyReadModel::Deep {
                target,
                chains,
                root_count,
            } => self.format_deep(target, chains, *root_count),
            WhyReadModel::Tree { target, roots } => self.format_tree(target, roots),
        })
    }
}
