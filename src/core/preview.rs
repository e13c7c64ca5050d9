//! Preview rendering for the picker
//!
//! Classifies a file as empty, text, or binary and renders the preview
//! pane content. Binary detection is the usual sniff: a NUL byte in the
//! first 8 KiB.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Lines of text shown in the preview pane
pub const PREVIEW_MAX_LINES: usize = 100;

/// Bytes read for classification and rendering
const PREVIEW_READ_LIMIT: u64 = 256 * 1024;

const BINARY_SNIFF_LEN: usize = 8192;

/// Render the preview for one file.
pub fn render(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return "[unreadable file]".to_string(),
    };

    let mut bytes = Vec::new();
    if file.take(PREVIEW_READ_LIMIT).read_to_end(&mut bytes).is_err() {
        return "[unreadable file]".to_string();
    }

    if bytes.is_empty() {
        return "[empty file]".to_string();
    }

    let sniff_len = bytes.len().min(BINARY_SNIFF_LEN);
    if bytes[..sniff_len].contains(&0) {
        return "[binary file]".to_string();
    }

    let text = String::from_utf8_lossy(&bytes);
    let mut out = String::new();
    for line in text.lines().take(PREVIEW_MAX_LINES) {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert_eq!(render(&path), "[empty file]");
    }

    #[test]
    fn test_text_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("note.txt");
        fs::write(&path, "line 1\nline 2\n").unwrap();
        assert_eq!(render(&path), "line 1\nline 2\n");
    }

    #[test]
    fn test_text_file_truncated_to_max_lines() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("long.txt");
        let content: String = (0..500).map(|i| format!("line {}\n", i)).collect();
        fs::write(&path, content).unwrap();

        let rendered = render(&path);
        assert_eq!(rendered.lines().count(), PREVIEW_MAX_LINES);
        assert!(rendered.starts_with("line 0\n"));
    }

    #[test]
    fn test_binary_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("blob.bin");
        fs::write(&path, [0x7fu8, b'E', b'L', b'F', 0x00, 0x01, 0x02]).unwrap();
        assert_eq!(render(&path), "[binary file]");
    }

    #[test]
    fn test_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("gone.txt");
        assert_eq!(render(&path), "[unreadable file]");
    }
}
