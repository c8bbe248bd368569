//! Deployment environment classification.
//!
//! The environment is derived purely from the git ref the workflow runs
//! on: the `main` branch deploys to production, everything else to
//! staging.

pub mod resolver;

pub use resolver::{DeployEnvironment, PRODUCTION_REF_SUFFIX};
