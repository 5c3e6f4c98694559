//! Interactive prompts
//!
//! [`Prompter`] is the seam between the scaffolding flow and the terminal.
//! [`TerminalPrompter`] drives real dialoguer widgets; tests substitute their
//! own implementation.

use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;

use crate::catalog::{Branch, Template, TemplateNode};
use crate::error::{Result, ScaffoldError};

/// Label of the project name prompt
pub const PROJECT_NAME_PROMPT: &str = "Project name:";

/// Name suggested when the user just presses enter
pub const DEFAULT_PROJECT_NAME: &str = "dpld-app";

/// Blocking user-input primitives
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Single-select menu; returns the index of the chosen item
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or is interrupted.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Free-text entry with a default value
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or is interrupted.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Yes/no question, defaulting to no
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails or is interrupted.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// [`Prompter`] backed by dialoguer on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Drives the catalog walk and the other questions over a [`Prompter`]
pub struct Selector<'p, P: Prompter + ?Sized> {
    prompter: &'p P,
}

impl<'p, P: Prompter + ?Sized> Selector<'p, P> {
    /// Wrap a prompter
    #[must_use]
    pub const fn new(prompter: &'p P) -> Self {
        Self { prompter }
    }

    /// Walk the catalog from `root` until a template is chosen
    ///
    /// # Errors
    ///
    /// Returns an error if a prompt fails or yields an index outside the
    /// offered choices.
    pub fn choose_template<'c>(&self, root: &'c Branch) -> Result<&'c Template> {
        let mut current = root;
        loop {
            let index = self.prompter.select(current.prompt(), &current.labels())?;
            let choice = current
                .choices()
                .get(index)
                .ok_or_else(|| ScaffoldError::InvalidSelection {
                    prompt: current.prompt().to_string(),
                    index,
                })?;
            debug!(prompt = current.prompt(), label = choice.label(), "choice made");

            match choice.node() {
                TemplateNode::Branch(next) => current = next,
                TemplateNode::Leaf(template) => return Ok(template),
            }
        }
    }

    /// Ask for the project name, returning the raw text
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn choose_project_name(&self) -> Result<String> {
        self.choose_project_name_with_default(DEFAULT_PROJECT_NAME)
    }

    /// Ask for the project name with a custom suggestion
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn choose_project_name_with_default(&self, default: &str) -> Result<String> {
        self.prompter.input(PROJECT_NAME_PROMPT, default)
    }

    /// Ask whether an occupied directory may be wiped
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt fails.
    pub fn confirm_overwrite(&self, path: &Path) -> Result<bool> {
        self.prompter.confirm(&format!(
            "Directory {} is not empty. Remove existing files and continue?",
            path.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TemplateCatalog;
    use mockall::Sequence;

    #[test]
    fn test_builtin_walk_asks_each_level_in_order() {
        let catalog = TemplateCatalog::builtin();
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();

        for (prompt, label) in [
            ("Choose app type:", "SSR/SSG"),
            ("Choose framework/library:", "Next.js"),
            ("Choose style engine:", "tailwind"),
        ] {
            prompter
                .expect_select()
                .withf(move |p, items| p == prompt && items == [label.to_string()])
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(0));
        }

        let template = Selector::new(&prompter)
            .choose_template(catalog.root())
            .unwrap();
        assert_eq!(template.directory(), "next-tailwind");
    }

    #[test]
    fn test_walk_follows_selected_index() {
        let root = Branch::new("Pick:")
            .with_choice("first", Template::new("one"))
            .with_choice(
                "second",
                Branch::new("Then:")
                    .with_choice("a", Template::new("two-a"))
                    .with_choice("b", Template::new("two-b")),
            );
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|p, _| p == "Pick:")
            .returning(|_, _| Ok(1));
        prompter
            .expect_select()
            .withf(|p, _| p == "Then:")
            .returning(|_, _| Ok(1));

        let template = Selector::new(&prompter).choose_template(&root).unwrap();
        assert_eq!(template.directory(), "two-b");
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        let root = Branch::new("Pick:").with_choice("only", Template::new("one"));
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_, _| Ok(5));

        let err = Selector::new(&prompter).choose_template(&root).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidSelection { index: 5, .. }));
    }

    #[test]
    fn test_project_name_prompt_uses_default() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .withf(|prompt, default| prompt == PROJECT_NAME_PROMPT && default == DEFAULT_PROJECT_NAME)
            .times(1)
            .returning(|_, default| Ok(default.to_string()));

        let name = Selector::new(&prompter).choose_project_name().unwrap();
        assert_eq!(name, "dpld-app");
    }

    #[test]
    fn test_confirm_overwrite_names_path() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_confirm()
            .withf(|p| p.contains("my-app") && p.contains("Remove existing files"))
            .times(1)
            .returning(|_| Ok(false));

        let confirmed = Selector::new(&prompter)
            .confirm_overwrite(Path::new("my-app"))
            .unwrap();
        assert!(!confirmed);
    }
}
