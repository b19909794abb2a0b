use clap::Parser;
use clustalo_cli::align::{Cli, cli};

fn main() -> anyhow::Result<()> {
    cli(Cli::parse())
}
