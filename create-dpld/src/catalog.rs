//! Template catalog
//!
//! The catalog is a tree of prompts. Each [`Branch`] asks one question and
//! offers labelled choices; each choice leads either to another branch or to a
//! terminal [`Template`] naming a directory under the templates root.

use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};

use crate::error::{Result, ScaffoldError};

/// Terminal catalog entry naming an on-disk template directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    directory: String,
}

impl Template {
    /// Create a template pointing at `directory` under the templates root
    #[must_use]
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory name relative to the templates root
    #[must_use]
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

/// A node in the catalog tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    /// Another question to ask
    Branch(Branch),
    /// A resolved template
    Leaf(Template),
}

impl From<Branch> for TemplateNode {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl From<Template> for TemplateNode {
    fn from(template: Template) -> Self {
        Self::Leaf(template)
    }
}

/// A labelled option within a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    label: String,
    node: TemplateNode,
}

impl Choice {
    /// Label shown in the menu
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Node reached by picking this choice
    #[must_use]
    pub const fn node(&self) -> &TemplateNode {
        &self.node
    }
}

/// A single-select question with ordered choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    prompt: String,
    choices: Vec<Choice>,
}

impl Branch {
    /// Create an empty branch with the given prompt text
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice, keeping declaration order
    #[must_use]
    pub fn with_choice(mut self, label: impl Into<String>, node: impl Into<TemplateNode>) -> Self {
        self.choices.push(Choice {
            label: label.into(),
            node: node.into(),
        });
        self
    }

    /// Prompt text
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Choices in declaration order
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Choice labels in declaration order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.label.clone()).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.choices.is_empty() {
            return Err(ScaffoldError::Catalog(format!(
                "branch '{}' has no choices",
                self.prompt
            )));
        }

        let mut seen = HashSet::new();
        for choice in &self.choices {
            if !seen.insert(choice.label.as_str()) {
                return Err(ScaffoldError::Catalog(format!(
                    "duplicate choice '{}' under '{}'",
                    choice.label, self.prompt
                )));
            }
            if let TemplateNode::Branch(child) = &choice.node {
                child.validate()?;
            }
        }

        Ok(())
    }

    fn collect_templates<'a>(&'a self, out: &mut Vec<&'a Template>) {
        for choice in &self.choices {
            match &choice.node {
                TemplateNode::Branch(child) => child.collect_templates(out),
                TemplateNode::Leaf(template) => out.push(template),
            }
        }
    }
}

/// Validated template tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    root: Branch,
}

impl TemplateCatalog {
    /// Build a catalog from its root branch
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Catalog`] if any branch is empty or repeats a
    /// label among its own choices.
    pub fn new(root: Branch) -> Result<Self> {
        root.validate()?;
        Ok(Self { root })
    }

    /// The catalog shipped with the tool
    #[must_use]
    pub fn builtin() -> Self {
        let root = Branch::new("Choose app type:").with_choice(
            "SSR/SSG",
            Branch::new("Choose framework/library:").with_choice(
                "Next.js",
                Branch::new("Choose style engine:")
                    .with_choice("tailwind", Template::new("next-tailwind")),
            ),
        );
        Self { root }
    }

    /// Root question
    #[must_use]
    pub const fn root(&self) -> &Branch {
        &self.root
    }

    /// Every template reachable from the root, depth-first
    #[must_use]
    pub fn templates(&self) -> Vec<&Template> {
        let mut out = Vec::new();
        self.root.collect_templates(&mut out);
        out
    }
}

/// Filename renames applied to top-level template entries
///
/// Template directories store files such as `.gitignore` under a neutral name
/// so packaging tools do not act on them; the rename restores the real name
/// in the generated project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameRules {
    rules: HashMap<OsString, OsString>,
}

impl RenameRules {
    /// Rules with no renames
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rename from `from` to `to`
    #[must_use]
    pub fn with_rule(mut self, from: impl Into<OsString>, to: impl Into<OsString>) -> Self {
        self.rules.insert(from.into(), to.into());
        self
    }

    /// The rules shipped with the tool
    #[must_use]
    pub fn builtin() -> Self {
        Self::new().with_rule("_gitignore", ".gitignore")
    }

    /// Destination name for a top-level entry, unchanged when no rule matches
    #[must_use]
    pub fn destination_name<'a>(&'a self, name: &'a OsStr) -> &'a OsStr {
        self.rules.get(name).map_or(name, OsString::as_os_str)
    }
}
