//! Scanned file entries and recency ranking

use std::path::PathBuf;
use std::time::SystemTime;

/// A regular file discovered during a scan. Immutable once produced.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path, used for preview and editor launch
    pub path: PathBuf,
    /// Path relative to the scan root, '/'-separated
    pub relative: String,
    /// Modification time as reported by the filesystem
    pub mtime: SystemTime,
}

/// Order entries by modification time, newest first.
///
/// The sort is stable, so entries with equal timestamps keep their
/// discovery order. No entries are dropped or added.
pub fn rank(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by(|a, b| b.mtime.cmp(&a.mtime));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(name: &str, secs: u64) -> FileEntry {
        FileEntry {
            path: PathBuf::from(format!("/scan/{}", name)),
            relative: name.to_string(),
            mtime: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_rank_newest_first() {
        let ranked = rank(vec![entry("old", 100), entry("new", 300), entry("mid", 200)]);
        let names: Vec<_> = ranked.iter().map(|e| e.relative.as_str()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_rank_is_idempotent() {
        let once = rank(vec![entry("a", 3), entry("b", 1), entry("c", 2)]);
        let twice = rank(once.clone());
        let first: Vec<_> = once.iter().map(|e| e.relative.as_str()).collect();
        let second: Vec<_> = twice.iter().map(|e| e.relative.as_str()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_preserves_length() {
        let entries: Vec<_> = (0..50).map(|i| entry(&format!("f{}", i), i % 7)).collect();
        assert_eq!(rank(entries).len(), 50);
    }

    #[test]
    fn test_rank_keeps_discovery_order_on_ties() {
        let ranked = rank(vec![entry("first", 5), entry("second", 5), entry("third", 5)]);
        let names: Vec<_> = ranked.iter().map(|e| e.relative.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
