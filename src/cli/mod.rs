//! CLI module for the Codeflix catalog
//!
//! Provides subcommands that drive the category lifecycle:
//! - `create`: build a new category
//! - `update`: rename / re-describe a stored category document
//! - `activate` / `deactivate`: toggle a stored category's status
//!
//! Every command prints the resulting category as JSON on stdout.

pub mod create;
pub mod status;
pub mod update;

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::Category;
use crate::infrastructure::logging;

/// Codeflix catalog - manage catalog categories
#[derive(Parser)]
#[command(name = "codeflix-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new category
    Create(create::CreateArgs),

    /// Update the name and/or description of a stored category
    Update(update::UpdateArgs),

    /// Mark a stored category as active
    Activate(status::StatusArgs),

    /// Mark a stored category as inactive
    Deactivate(status::StatusArgs),
}

/// Load configuration, set up logging and execute the selected command
pub fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let category = match cli.command {
        Command::Create(args) => create::run(args)?,
        Command::Update(args) => update::run(args)?,
        Command::Activate(args) => status::activate(args)?,
        Command::Deactivate(args) => status::deactivate(args)?,
    };

    println!("{}", serde_json::to_string_pretty(&category)?);
    Ok(())
}

/// Read and validate a category JSON document
pub(crate) fn load_category(path: &Path) -> anyhow::Result<Category> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read category file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid category document {}", path.display()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use crate::domain::Category;

    /// Write a category to a unique file in the system temp directory
    pub fn write_category(category: &Category) -> PathBuf {
        let path = std::env::temp_dir().join(format!("category-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, serde_json::to_string(category).unwrap()).unwrap();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::write_category;
    use super::*;

    #[test]
    fn test_cli_parses_create() {
        let cli = Cli::try_parse_from([
            "codeflix-catalog",
            "create",
            "Movies",
            "--description",
            "Feature films",
            "--inactive",
        ])
        .unwrap();

        match cli.command {
            Command::Create(args) => {
                assert_eq!(args.name, "Movies");
                assert_eq!(args.description, "Feature films");
                assert!(args.inactive);
            }
            _ => panic!("expected create command"),
        }
    }

    #[test]
    fn test_cli_parses_update() {
        let cli =
            Cli::try_parse_from(["codeflix-catalog", "update", "cat.json", "--name", "Series"])
                .unwrap();

        match cli.command {
            Command::Update(args) => {
                assert_eq!(args.name.as_deref(), Some("Series"));
                assert!(args.description.is_none());
            }
            _ => panic!("expected update command"),
        }
    }

    #[test]
    fn test_load_category() {
        let category = Category::new("Movies", "Feature films").unwrap();
        let path = write_category(&category);

        let loaded = load_category(&path).unwrap();
        assert_eq!(loaded, category);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_category_rejects_invalid_document() {
        let path = std::env::temp_dir().join(format!("category-{}.json", uuid::Uuid::new_v4()));
        let json = serde_json::json!({
            "id": uuid::Uuid::new_v4(),
            "name": "",
            "description": "",
            "created_at": chrono::Utc::now(),
        });
        std::fs::write(&path, json.to_string()).unwrap();

        let error = load_category(&path).unwrap_err();
        assert!(format!("{:#}", error).contains("Name should not be empty or null"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_category_missing_file() {
        let path = std::env::temp_dir().join("does-not-exist-category.json");
        assert!(load_category(&path).is_err());
    }
}
