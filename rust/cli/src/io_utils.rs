//! Small I/O helpers shared by the commands.
//!
//! - Reading one line of interactive input
//! - Reading a text file with any UTF-8 BOM stripped

use std::io::BufRead;
use std::path::Path;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line (possibly empty), or `None` on EOF or a read
/// error.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use holdem_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Read a whole text file, dropping a leading UTF-8 BOM.
pub fn read_text<P: AsRef<Path>>(path: P) -> std::io::Result<String> {
    let mut content = std::fs::read_to_string(path)?;
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_stdin_line_with_whitespace() {
        let mut cursor = Cursor::new(b"  raise 40  \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("raise 40".to_string()));
    }

    #[test]
    fn test_read_stdin_line_empty_after_trim() {
        let mut cursor = Cursor::new(b"   \n");
        assert_eq!(read_stdin_line(&mut cursor), Some("".to_string()));
    }

    #[test]
    fn test_read_stdin_line_eof() {
        let mut cursor = Cursor::new(b"");
        assert_eq!(read_stdin_line(&mut cursor), None);
    }

    #[test]
    fn test_strip_utf8_bom() {
        let mut s = "\u{feff}seed = 1".to_string();
        strip_utf8_bom(&mut s);
        assert_eq!(s, "seed = 1");
    }

    #[test]
    fn test_read_text_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holdem.toml");
        std::fs::write(&path, "\u{feff}big_blind = 20\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "big_blind = 20\n");
    }

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_text(dir.path().join("nope.toml")).is_err());
    }
}
