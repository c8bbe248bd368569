//! The matrix command.
//!
//! Resolves the environment, discovers manifests and appends the output
//! record. Every failure aborts before anything is written.

use std::path::PathBuf;

use tracing::info;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::matrix::MatrixBuilder;
use crate::output::{GithubOutput, OutputRecord};

/// Generates and writes the build matrix for one ref.
#[derive(Debug, Clone)]
pub struct MatrixCommand {
    git_ref: String,
    builder: MatrixBuilder,
    output: GithubOutput,
}

impl MatrixCommand {
    /// Create a command from explicit inputs.
    pub fn new(
        git_ref: impl Into<String>,
        workspace: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            git_ref: git_ref.into(),
            builder: MatrixBuilder::new(workspace),
            output: GithubOutput::new(output),
        }
    }

    /// Create a command from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(&cli.git_ref, &cli.workspace, &cli.output)
    }

    /// Execute the command, returning the record that was appended.
    pub fn execute(&self) -> Result<OutputRecord> {
        let record = self.builder.build(&self.git_ref)?;
        self.output.append(&record)?;

        info!(
            "environment={} networks={} -> {:?}",
            record.environment,
            record.matrix.len(),
            self.output.path()
        );

        Ok(record)
    }
}
