//! Listing flow: scan, rank, print the newest N

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::backends::scanner;
use crate::core::entry::{rank, FileEntry};
use crate::core::exclude::{ExclusionSet, DEFAULT_EXCLUDES};
use crate::core::util::{format_mtime, mtime_ms};

/// Output format for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    #[default]
    Plain,
    Jsonl,
}

impl std::str::FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(ListFormat::Plain),
            "jsonl" => Ok(ListFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

#[derive(Serialize)]
struct ListItem<'a> {
    path: &'a str,
    mtime_ms: i64,
    mtime: String,
}

/// Merge default and extra patterns for one invocation.
pub fn build_exclusions(extra: &[String], no_defaults: bool) -> ExclusionSet {
    let defaults: &[&str] = if no_defaults { &[] } else { DEFAULT_EXCLUDES };
    ExclusionSet::build(defaults, extra)
}

/// Render the ranked list, newest first, up to `count` lines.
fn render_listing(entries: &[FileEntry], count: usize, format: ListFormat) -> String {
    let mut out = String::new();
    for entry in entries.iter().take(count) {
        let line = match format {
            ListFormat::Plain => {
                format!("{}  {}", format_mtime(entry.mtime), entry.relative)
            }
            ListFormat::Jsonl => {
                let item = ListItem {
                    path: &entry.relative,
                    mtime_ms: mtime_ms(entry.mtime),
                    mtime: format_mtime(entry.mtime),
                };
                serde_json::to_string(&item).unwrap_or_default()
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Run the recent command
pub fn run_recent(
    root: &Path,
    count: usize,
    exclude: &[String],
    no_default_excludes: bool,
    format: ListFormat,
) -> Result<()> {
    let exclusions = build_exclusions(exclude, no_default_excludes);
    let entries = rank(scanner::scan(root, &exclusions)?);

    print!("{}", render_listing(&entries, count, format));
    Ok(())
}
