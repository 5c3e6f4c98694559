//! create-dpld library
//!
//! Scaffolds a new dpld application from a bundled template:
//! - [`catalog`] - nested template choices and top-level rename rules
//! - [`prompt`] - interactive selection over the catalog
//! - [`name`] - project name sanitization
//! - [`destination`] - existing-directory checks before writing
//! - [`materialize`] - template copy with manifest patching
//! - [`commands`] - the end-to-end `create` flow

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod commands;
pub mod config;
pub mod copy;
pub mod destination;
pub mod error;
pub mod materialize;
pub mod name;
pub mod observability;
pub mod prompt;

pub use catalog::{Branch, Choice, RenameRules, Template, TemplateCatalog, TemplateNode};
pub use commands::{CreateCommand, Outcome};
pub use config::ScaffoldConfig;
pub use destination::Destination;
pub use error::ScaffoldError;
pub use materialize::{ProjectMaterializer, MANIFEST_FILE};
pub use name::{sanitize, ProjectName};
pub use prompt::{Prompter, Selector, TerminalPrompter};
