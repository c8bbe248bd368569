//! CLI argument definitions.
//!
//! The tool takes one positional ref. Both paths normally come from the
//! GitHub Actions runner environment; the flags exist for local runs.

use clap::Parser;
use std::path::PathBuf;

/// Emit the subgraph network build matrix for a CI run.
#[derive(Debug, Parser)]
#[command(name = "netmatrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Git ref the workflow runs on (e.g. refs/heads/main)
    #[arg(value_name = "REF")]
    pub git_ref: String,

    /// Workspace root containing packages/subgraph/manifest/data
    #[arg(long, env = "GITHUB_WORKSPACE", value_name = "PATH")]
    pub workspace: PathBuf,

    /// File that step outputs are appended to
    #[arg(long, env = "GITHUB_OUTPUT", value_name = "PATH")]
    pub output: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
