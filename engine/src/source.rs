use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a one-entry-per-line listing, such as the document list or the
/// noise-word list. Blank lines are ignored; surrounding whitespace is
/// trimmed. A missing or unreadable file is the caller's error to handle.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Reads one document and yields its raw whitespace-delimited tokens in
/// document order. No normalization happens here; that is the engine's job.
pub fn document_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
