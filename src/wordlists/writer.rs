//! Word list output
//!
//! Writes one word per line, newline-terminated, with no header.

use crate::core::Word;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write words to any sink, one per line
///
/// # Errors
///
/// Returns an I/O error if the sink rejects a write.
pub fn write_lines<W: Write>(mut sink: W, words: &[Word]) -> io::Result<()> {
    for word in words {
        writeln!(sink, "{word}")?;
    }
    sink.flush()
}

/// Create (or truncate) a file and write the words into it
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file<P: AsRef<Path>>(path: P, words: &[Word]) -> io::Result<()> {
    let file = File::create(path)?;
    write_lines(BufWriter::new(file), words)
}
