//! Editor launching

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};

/// Open the file in the configured editor and report its exit code.
///
/// The editor value may carry arguments ("code --wait"); it is split on
/// whitespace and the path appended last. A signal death maps to 1.
pub fn open(path: &Path, editor: &str) -> Result<i32> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().context("editor command is empty")?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;

    Ok(status.code().unwrap_or(1))
}
