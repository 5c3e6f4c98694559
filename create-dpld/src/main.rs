//! create-dpld CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use console::style;

use create_dpld::{
    observability, CreateCommand, Outcome, RenameRules, ScaffoldConfig, TemplateCatalog,
    TerminalPrompter,
};

#[derive(Parser)]
#[command(name = "create-dpld")]
#[command(version)]
#[command(about = "Create a new dpld application from a template", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    observability::init()?;

    let config = ScaffoldConfig::discover()?;
    let catalog = TemplateCatalog::builtin();
    let renames = RenameRules::builtin();
    let prompter = TerminalPrompter::new();

    let outcome = CreateCommand::new(&config, &catalog, &renames, &prompter).execute()?;
    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Created {
            name,
            template,
            entries,
            ..
        } => {
            println!();
            println!(
                "{} {} {}",
                style("✓ Created").green().bold(),
                style(name).cyan().bold(),
                style(format!("from {template} ({} entries)", entries.len())).dim()
            );
            println!();
            println!("{}", style("Next steps:").bold());
            println!();
            println!("  {} {}", style("$").dim(), style(format!("cd {name}")).cyan());
            println!("  {} {}", style("$").dim(), style("npm install").cyan());
            println!("  {} {}", style("$").dim(), style("npm run dev").cyan());
            println!();
        }
        Outcome::Aborted { path } => {
            println!(
                "{} {}",
                style("✗ Cancelled:").yellow().bold(),
                style(format!("{} left unchanged", path.display())).dim()
            );
        }
    }
}
