//! Typed error taxonomy
//!
//! Only two conditions are fatal for an invocation: a missing external
//! tool and an unusable scan root. Everything else is recovered locally
//! during traversal.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A required external tool is not discoverable on PATH.
    #[error("{tool} is required but was not found in PATH")]
    MissingDependency { tool: &'static str },

    /// The scan root does not exist or cannot be read.
    #[error("cannot scan {}: {reason}", path.display())]
    Scan { path: PathBuf, reason: String },
}
