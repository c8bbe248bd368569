//! Network manifest discovery.
//!
//! Each network a subgraph deploys to has a JSON manifest under
//! `packages/subgraph/manifest/data`. The manifest's file stem is the
//! network identifier used in the CI build matrix.

pub mod discovery;

pub use discovery::{
    discover_networks, manifest_dir, network_id, LOCALHOST_MANIFEST, MANIFEST_DATA_DIR,
    MANIFEST_EXTENSION,
};
