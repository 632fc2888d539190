//! Activate / deactivate commands

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::domain::Category;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to a category JSON document
    pub file: PathBuf,
}

pub fn activate(args: StatusArgs) -> anyhow::Result<Category> {
    let mut category = super::load_category(&args.file)?;
    category.activate();

    info!(category_id = %category.id(), "Activated category '{}'", category.name());
    Ok(category)
}

pub fn deactivate(args: StatusArgs) -> anyhow::Result<Category> {
    let mut category = super::load_category(&args.file)?;
    category.deactivate();

    info!(category_id = %category.id(), "Deactivated category '{}'", category.name());
    Ok(category)
}
