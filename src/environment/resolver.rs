//! Environment resolution from a git ref.

use std::fmt;

/// Refs ending with this suffix deploy to production.
pub const PRODUCTION_REF_SUFFIX: &str = "/main";

/// Target environment for a deployment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployEnvironment {
    /// Deploys from the main branch.
    Production,
    /// Every other ref.
    Staging,
}

impl DeployEnvironment {
    /// Classify a git ref.
    ///
    /// Only the literal suffix is checked; the ref is not otherwise
    /// validated, so `"main"` (no slash) is staging.
    ///
    /// # Example
    ///
    /// ```
    /// use netmatrix::environment::DeployEnvironment;
    ///
    /// assert_eq!(
    ///     DeployEnvironment::from_ref("refs/heads/main"),
    ///     DeployEnvironment::Production
    /// );
    /// assert_eq!(
    ///     DeployEnvironment::from_ref("refs/heads/feature/x"),
    ///     DeployEnvironment::Staging
    /// );
    /// ```
    pub fn from_ref(git_ref: &str) -> Self {
        if git_ref.ends_with(PRODUCTION_REF_SUFFIX) {
            Self::Production
        } else {
            Self::Staging
        }
    }

    /// The label written to the CI output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Staging => "staging",
        }
    }

    /// Whether this run targets test networks.
    ///
    /// Not part of the output record.
    pub fn is_testnet(self) -> bool {
        self == Self::Staging
    }
}

impl fmt::Display for DeployEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
