//! Recursive manifest directory scanning.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{MatrixError, Result};

/// Manifest data directory, relative to the workspace root.
pub const MANIFEST_DATA_DIR: &str = "packages/subgraph/manifest/data";

/// Suffix that marks a file as a network manifest.
pub const MANIFEST_EXTENSION: &str = ".json";

/// Local development manifest, never part of the build matrix.
pub const LOCALHOST_MANIFEST: &str = "localhost.json";

/// Resolve the manifest data directory for a workspace root.
pub fn manifest_dir(workspace: &Path) -> PathBuf {
    workspace.join(MANIFEST_DATA_DIR)
}

/// Map a manifest file name to its network identifier.
///
/// Returns `None` for files that are not network manifests.
///
/// ```
/// use netmatrix::manifest::network_id;
///
/// assert_eq!(network_id("mainnet.json"), Some("mainnet"));
/// assert_eq!(network_id("localhost.json"), None);
/// assert_eq!(network_id("notes.txt"), None);
/// ```
pub fn network_id(file_name: &str) -> Option<&str> {
    if file_name == LOCALHOST_MANIFEST {
        return None;
    }
    file_name.strip_suffix(MANIFEST_EXTENSION)
}

/// Collect network identifiers from every manifest under `dir`.
///
/// Subdirectories are walked recursively but only the base name of each
/// file contributes to the identifier, so `group1/x.json` and `x.json`
/// both yield `x`. Duplicates are kept. Order follows the directory walk
/// and is not guaranteed to be stable across filesystems.
pub fn discover_networks(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(MatrixError::ManifestDirNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut networks = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1) {
        let entry = entry.map_err(|source| MatrixError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;

        // Follows file symlinks; dangling links are skipped.
        if !entry.path().is_file() {
            continue;
        }

        // Non UTF-8 names can never match the manifest suffix.
        let Some(name) = entry.file_name().to_str() else {
            trace!("Skipping non UTF-8 file name: {:?}", entry.path());
            continue;
        };

        match network_id(name) {
            Some(id) => {
                debug!("Found manifest for network '{}' at {:?}", id, entry.path());
                networks.push(id.to_string());
            }
            None => trace!("Ignoring {:?}", entry.path()),
        }
    }

    Ok(networks)
}
