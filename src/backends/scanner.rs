//! Filesystem scanning backend
//!
//! Walks the tree with the ignore crate's walker. Hidden files are
//! included, symlinks are followed (the walker detects link cycles and
//! reports them as per-entry errors, which are skipped), and gitignore
//! handling is disabled entirely: the exclusion set is the only filter.
//! Exclusions go through filter_entry so excluded directories are
//! pruned without descending into them.

use std::fs;
use std::path::Path;

use ignore::{Walk, WalkBuilder};

use crate::core::entry::FileEntry;
use crate::core::error::Error;
use crate::core::exclude::ExclusionSet;
use crate::core::util::make_relative;

fn build_walker(root: &Path, exclusions: &ExclusionSet) -> Walk {
    let filter_root = root.to_path_buf();
    let filter_exclusions = exclusions.clone();

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .follow_links(true)
        .require_git(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .filter_entry(move |entry| match make_relative(entry.path(), &filter_root) {
            Some(rel) if !rel.is_empty() => !filter_exclusions.matches(&rel),
            _ => true,
        });
    builder.build()
}

fn check_root(root: &Path) -> Result<(), Error> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::Scan {
            path: root.to_path_buf(),
            reason: "not a directory".to_string(),
        }),
        Err(e) => Err(Error::Scan {
            path: root.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}

/// Walk the tree and collect matching regular files with their mtimes.
///
/// Re-invoking re-walks the filesystem; nothing is cached. Unreadable
/// subtrees and entries whose metadata cannot be read are skipped; only
/// a missing or unreadable root is fatal.
pub fn scan(root: &Path, exclusions: &ExclusionSet) -> Result<Vec<FileEntry>, Error> {
    check_root(root)?;

    let mut entries = Vec::new();
    for entry in build_walker(root, exclusions) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let is_file = entry.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let path = entry.path();
        let relative = match make_relative(path, root) {
            Some(r) => r,
            None => continue,
        };

        let mtime = match fs::metadata(path).and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => continue,
        };

        entries.push(FileEntry {
            path: path.to_path_buf(),
            relative,
            mtime,
        });
    }

    Ok(entries)
}

/// Count matching files without touching their metadata.
///
/// One extra directory pass, used by the safety guard before the
/// expensive ranking and preview work.
pub fn count(root: &Path, exclusions: &ExclusionSet) -> Result<usize, Error> {
    check_root(root)?;

    let n = build_walker(root, exclusions)
        .filter_map(|entry| entry.ok())
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .count();
    Ok(n)
}
