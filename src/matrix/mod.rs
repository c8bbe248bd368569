//! Build matrix model and construction.
//!
//! - [`BuildMatrix`] - the `{"network": [...]}` mapping handed to CI
//! - [`MatrixBuilder`] - ties environment classification and manifest
//!   discovery together into an [`OutputRecord`](crate::output::OutputRecord)
//! - [`format`] - single-line JSON encoding

pub mod builder;
pub mod format;

pub use builder::MatrixBuilder;
pub use format::{to_single_line, SpacedFormatter};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// CI build matrix: one job variant per network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMatrix {
    /// Network identifiers in discovery order.
    pub network: Vec<String>,
}

impl BuildMatrix {
    /// Create a matrix from a list of network identifiers.
    pub fn new(network: Vec<String>) -> Self {
        Self { network }
    }

    /// Number of job variants.
    pub fn len(&self) -> usize {
        self.network.len()
    }

    /// Whether the matrix has no networks.
    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    /// Encode as a single line of JSON.
    pub fn to_json(&self) -> Result<String> {
        to_single_line(self)
    }
}
