//! Create command - builds a new category from arguments

use clap::Args;
use tracing::info;

use crate::domain::{Category, CreateCategory};

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Category name (3 to 255 characters)
    pub name: String,

    /// Category description (up to 10000 characters)
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Create the category as inactive
    #[arg(long)]
    pub inactive: bool,
}

pub fn run(args: CreateArgs) -> anyhow::Result<Category> {
    let command = CreateCategory::new(args.name, args.description).with_is_active(!args.inactive);
    let category = Category::create(command)?;

    info!(category_id = %category.id(), "Created category '{}'", category.name());
    Ok(category)
}
