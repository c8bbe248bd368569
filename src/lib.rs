//! Netmatrix - CI build matrix for per-network subgraph deployments.
//!
//! Given the git ref a workflow runs on, netmatrix picks the deployment
//! environment and lists every network manifest in the workspace, then
//! appends both to the GitHub Actions step output file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Production/staging classification from a ref
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Network manifest discovery
//! - [`matrix`] - Build matrix model, builder and JSON encoding
//! - [`output`] - Step output record and append-only writer
//!
//! # Example
//!
//! ```
//! use netmatrix::environment::DeployEnvironment;
//! use netmatrix::matrix::BuildMatrix;
//! use netmatrix::output::OutputRecord;
//!
//! let record = OutputRecord::new(
//!     DeployEnvironment::from_ref("refs/heads/main"),
//!     BuildMatrix::new(vec!["mainnet".to_string()]),
//! );
//! assert_eq!(
//!     record.render().unwrap(),
//!     "environment=production\nmatrix={\"network\": [\"mainnet\"]}\n"
//! );
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod matrix;
pub mod output;

pub use error::{MatrixError, Result};
