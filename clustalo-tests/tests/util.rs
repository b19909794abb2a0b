use std::{env, fs, path::PathBuf};

use anyhow::{Result, anyhow};
use clap::Parser;
use clustalo_cli::align;

pub fn run_in_repo_root(args: &str) -> Result<()> {
    // The fixtures are addressed relative to the repo root, one level above this crate.
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or(anyhow!("No parent directory"))?
        .to_path_buf();
    env::set_current_dir(repo_root)?;

    let args = align::Cli::try_parse_from(args.split_whitespace())?;
    align::cli(args)
}

/// A fresh path in the temporary directory.
pub fn output_path(name: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("clustalo-tests-{}-{name}", std::process::id()));
    let _ = fs::remove_file(&path);
    path
}
