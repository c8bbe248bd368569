//! Matrix construction from a workspace and git ref.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::BuildMatrix;
use crate::environment::DeployEnvironment;
use crate::error::Result;
use crate::manifest::{discover_networks, manifest_dir};
use crate::output::OutputRecord;

/// Builds the CI output record for a workspace.
///
/// # Example
///
/// ```no_run
/// use netmatrix::matrix::MatrixBuilder;
/// use netmatrix::output::GithubOutput;
///
/// let record = MatrixBuilder::new("/github/workspace").build("refs/heads/main")?;
/// GithubOutput::new("/github/output").append(&record)?;
/// # Ok::<(), netmatrix::MatrixError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder {
    workspace: PathBuf,
}

impl MatrixBuilder {
    /// Create a builder rooted at the given workspace directory.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// Get the workspace root.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    /// Directory scanned for network manifests.
    pub fn manifest_dir(&self) -> PathBuf {
        manifest_dir(&self.workspace)
    }

    /// Classify `git_ref` and discover every network manifest.
    pub fn build(&self, git_ref: &str) -> Result<OutputRecord> {
        let environment = DeployEnvironment::from_ref(git_ref);
        debug!(
            "Ref {:?} resolved to {} (testnet: {})",
            git_ref,
            environment,
            environment.is_testnet()
        );

        let dir = self.manifest_dir();
        let networks = discover_networks(&dir)?;
        info!(
            "Found {} network manifest(s) in {:?}",
            networks.len(),
            dir
        );

        Ok(OutputRecord::new(environment, BuildMatrix::new(networks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use std::fs;
    use tempfile::TempDir;

    fn workspace_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        let data = manifest_dir(temp.path());
        fs::create_dir_all(&data).unwrap();
        for f in files {
            let path = data.join(f);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "{}").unwrap();
        }
        temp
    }

    #[test]
    fn builds_production_record() {
        let ws = workspace_with(&["mainnet.json", "localhost.json"]);
        let record = MatrixBuilder::new(ws.path())
            .build("refs/heads/main")
            .unwrap();

        assert_eq!(record.environment, DeployEnvironment::Production);
        assert_eq!(record.matrix.network, vec!["mainnet"]);
    }

    #[test]
    fn builds_staging_record() {
        let ws = workspace_with(&["sepolia.json", "nested/holesky.json", "readme.md"]);
        let record = MatrixBuilder::new(ws.path())
            .build("refs/heads/feature/x")
            .unwrap();

        assert_eq!(record.environment, DeployEnvironment::Staging);
        let mut networks = record.matrix.network.clone();
        networks.sort();
        assert_eq!(networks, vec!["holesky", "sepolia"]);
    }

    #[test]
    fn empty_manifest_dir_builds_empty_matrix() {
        let ws = workspace_with(&[]);
        let record = MatrixBuilder::new(ws.path()).build("anything").unwrap();

        assert!(record.matrix.is_empty());
        assert_eq!(
            record.render().unwrap(),
            "environment=staging\nmatrix={\"network\": []}\n"
        );
    }

    #[test]
    fn missing_manifest_dir_fails() {
        let temp = TempDir::new().unwrap();
        let err = MatrixBuilder::new(temp.path())
            .build("refs/heads/main")
            .unwrap_err();

        assert!(matches!(err, MatrixError::ManifestDirNotFound { .. }));
    }

    #[test]
    fn manifest_dir_is_under_workspace() {
        let builder = MatrixBuilder::new("/ws");
        assert_eq!(builder.workspace(), Path::new("/ws"));
        assert_eq!(
            builder.manifest_dir(),
            PathBuf::from("/ws/packages/subgraph/manifest/data")
        );
    }
}
