//! Interactive flow: scan, rank, pick with fzf, open in the editor

use std::path::Path;
use std::process;

use anyhow::Result;

use crate::backends::{editor, fzf, scanner};
use crate::core::entry::rank;
use crate::core::guard::{self, Verdict};
use crate::flows::recent::build_exclusions;

/// Run the red command.
///
/// The fzf check comes before any scanning so a missing picker fails
/// cheaply. After a selection the process exits with the editor's own
/// exit code; a guard decline exits 1.
pub fn run_red(
    root: &Path,
    exclude: &[String],
    no_default_excludes: bool,
    editor_cmd: &str,
    threshold: usize,
) -> Result<()> {
    fzf::ensure_available()?;

    let exclusions = build_exclusions(exclude, no_default_excludes);

    let count = scanner::count(root, &exclusions)?;
    if guard::check(count, threshold, || guard::confirm_via_prompt(count)) == Verdict::Abort {
        eprintln!("Aborted.");
        process::exit(1);
    }

    let entries = rank(scanner::scan(root, &exclusions)?);
    if entries.is_empty() {
        // Nothing to pick from; an empty tree is not an error.
        println!("No file selected.");
        return Ok(());
    }

    match fzf::pick(root, &entries)? {
        Some(selected) => {
            let code = editor::open(&root.join(&selected), editor_cmd)?;
            process::exit(code);
        }
        None => {
            println!("No file selected.");
            Ok(())
        }
    }
}
