//! File and stdin helpers used by the commands.
//!
//! Round histories may be stored plain or Zstandard-compressed; anything
//! ending in `.zst` is decompressed transparently on read.

use std::io::BufRead;
use std::path::Path;

/// Next line from `stdin`, trimmed. `None` on EOF or a read error.
///
/// ```rust
/// use std::io::Cursor;
/// # use ridebus_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  higher \n");
/// assert_eq!(read_stdin_line(&mut input), Some("higher".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Reads a text file, decompressing `.zst` files and stripping a UTF-8 BOM.
pub fn read_text_auto(path: &Path) -> std::io::Result<String> {
    let is_zst = path.extension().is_some_and(|ext| ext == "zst");
    let mut content = if is_zst {
        let file = std::fs::File::open(path)?;
        let bytes = zstd::stream::decode_all(file)?;
        String::from_utf8(bytes).map_err(std::io::Error::other)?
    } else {
        std::fs::read_to_string(path)?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// True for files `stats` should pick up when walking a directory.
pub fn is_history_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.ends_with(".jsonl") || name.ends_with(".jsonl.zst"))
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
