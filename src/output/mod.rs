//! CI step output.
//!
//! GitHub Actions collects step outputs from the file named by
//! `GITHUB_OUTPUT`, one `key=value` per line. [`OutputRecord`] renders the
//! two lines this tool produces and [`GithubOutput`] appends them.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::environment::DeployEnvironment;
use crate::error::{MatrixError, Result};
use crate::matrix::BuildMatrix;

/// Output key for the environment label.
pub const ENVIRONMENT_KEY: &str = "environment";

/// Output key for the encoded build matrix.
pub const MATRIX_KEY: &str = "matrix";

/// The result of a single run: environment plus build matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub environment: DeployEnvironment,
    pub matrix: BuildMatrix,
}

impl OutputRecord {
    /// Create a new record.
    pub fn new(environment: DeployEnvironment, matrix: BuildMatrix) -> Self {
        Self {
            environment,
            matrix,
        }
    }

    /// Render both output lines, each newline-terminated.
    pub fn render(&self) -> Result<String> {
        Ok(format!(
            "{}={}\n{}={}\n",
            ENVIRONMENT_KEY,
            self.environment.label(),
            MATRIX_KEY,
            self.matrix.to_json()?
        ))
    }
}

/// Append-only writer for the GitHub Actions output file.
#[derive(Debug, Clone)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    /// Create a writer for the given output file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a record to the output file.
    ///
    /// The file is created if missing but its parent directory is not.
    /// The record is rendered before the file is opened and written with
    /// a single call, so a failure never leaves just one of the two lines.
    pub fn append(&self, record: &OutputRecord) -> Result<()> {
        let rendered = record.render()?;

        let write_err = |source: std::io::Error| MatrixError::OutputWrite {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(rendered.as_bytes()).map_err(write_err)?;

        debug!("Appended {} bytes to {:?}", rendered.len(), self.path);
        Ok(())
    }
}
