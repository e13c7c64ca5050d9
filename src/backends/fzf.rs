//! fzf picker integration
//!
//! Feeds the ranked list to fzf over stdin and reads the selection
//! back. fzf's own ordering is disabled so the list stays in recency
//! order; the preview pane re-enters this binary so the rendering
//! logic lives in one place.

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::core::entry::FileEntry;
use crate::core::error::Error;
use crate::core::util::command_exists;

/// Exit code fzf uses when the user cancels (Esc or interrupt)
const FZF_EXIT_CANCELLED: i32 = 130;
/// Exit code fzf uses when nothing matched the query
const FZF_EXIT_NO_MATCH: i32 = 1;

static FZF_AVAILABLE: Lazy<bool> = Lazy::new(|| command_exists("fzf"));

/// Check if fzf is available
pub fn is_fzf_available() -> bool {
    *FZF_AVAILABLE
}

/// Fail fast when the picker dependency is missing.
pub fn ensure_available() -> Result<(), Error> {
    if is_fzf_available() {
        Ok(())
    } else {
        Err(Error::MissingDependency { tool: "fzf" })
    }
}

/// Run fzf over the ranked entries.
///
/// Blocks until the user acts. Returns the selected relative path, or
/// None when the picker exits without a choice.
pub fn pick(root: &Path, entries: &[FileEntry]) -> Result<Option<String>> {
    let preview = preview_command()?;

    let mut child = Command::new("fzf")
        .arg("--no-sort")
        .arg("--no-multi")
        .arg("--preview")
        .arg(&preview)
        .current_dir(root)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("failed to launch fzf")?;

    if let Some(mut stdin) = child.stdin.take() {
        for entry in entries {
            // fzf may exit before the whole list is written
            if writeln!(stdin, "{}", entry.relative).is_err() {
                break;
            }
        }
    }

    let output = child.wait_with_output().context("fzf did not exit cleanly")?;
    let code = output.status.code().unwrap_or(FZF_EXIT_CANCELLED);
    selection_from_output(code, &output.stdout)
}

fn preview_command() -> Result<String> {
    let exe = env::current_exe().context("cannot locate current executable")?;
    Ok(format!("'{}' preview {{}}", exe.display()))
}

/// Map fzf's exit code and stdout to a selection.
pub fn selection_from_output(code: i32, stdout: &[u8]) -> Result<Option<String>> {
    match code {
        0 => {
            let line = String::from_utf8_lossy(stdout);
            let selected = line.trim();
            if selected.is_empty() {
                Ok(None)
            } else {
                Ok(Some(selected.to_string()))
            }
        }
        FZF_EXIT_NO_MATCH | FZF_EXIT_CANCELLED => Ok(None),
        other => anyhow::bail!("fzf exited with status {}", other),
    }
}
