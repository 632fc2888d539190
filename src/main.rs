use clap::Parser;
use codeflix_catalog::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
