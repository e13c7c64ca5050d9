//! Common utilities

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Normalize a path to use '/' as separator
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the scan root, '/'-separated
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(|p| normalize_path(p))
}

/// Modification time in milliseconds since epoch
pub fn mtime_ms(mtime: SystemTime) -> i64 {
    mtime
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Render a modification time for listing output
pub fn format_mtime(mtime: SystemTime) -> String {
    let local: DateTime<Local> = mtime.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Check if a command is available in PATH
pub fn command_exists(cmd: &str) -> bool {
    std::process::Command::new("which")
        .arg(cmd)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("src/main.rs")), "src/main.rs");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/src/main.rs");
        assert_eq!(make_relative(path, root), Some("src/main.rs".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = PathBuf::from("/project");
        let path = Path::new("/other/file.rs");
        assert_eq!(make_relative(path, &root), None);
    }

    #[test]
    fn test_mtime_ms_epoch() {
        assert_eq!(mtime_ms(SystemTime::UNIX_EPOCH), 0);
        let later = SystemTime::UNIX_EPOCH + Duration::from_secs(2);
        assert_eq!(mtime_ms(later), 2000);
    }

    #[test]
    fn test_format_mtime_shape() {
        let rendered = format_mtime(SystemTime::now());
        // "YYYY-MM-DD HH:MM"
        assert_eq!(rendered.len(), 16);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
    }

    #[test]
    fn test_command_exists_for_missing_command() {
        assert!(!command_exists("definitely-not-a-real-command-9f2c"));
    }
}
