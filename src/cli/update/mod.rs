//! Update command - renames or re-describes a stored category

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::domain::{Category, UpdateCategory};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Path to a category JSON document
    pub file: PathBuf,

    /// New name; keeps the current name when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description; keeps the current description when omitted
    #[arg(short, long)]
    pub description: Option<String>,
}

pub fn run(args: UpdateArgs) -> anyhow::Result<Category> {
    let mut category = super::load_category(&args.file)?;

    let name = args.name.unwrap_or_else(|| category.name().to_string());
    category.apply(UpdateCategory {
        name: Some(name),
        description: args.description,
    })?;

    info!(category_id = %category.id(), "Updated category '{}'", category.name());
    Ok(category)
}
