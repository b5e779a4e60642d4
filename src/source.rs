//! Line source: turns raw input into the cleaned lines the assembler reads.

use std::io::BufRead;

use crate::cursor::is_space;
use crate::error::AsmError;

/// Drop a `;` comment, a carriage return and trailing blanks.
pub fn clean_line(raw: &str) -> &str {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    let line = match line.find(';') {
        Some(p) => &line[..p],
        None => line,
    };
    line.trim_end_matches(|c: char| is_space(c) || c == '\r')
}

/// Cleaned lines of `reader`; a line longer than `max_len` bytes is an error.
pub fn clean_lines<R: BufRead>(
    reader: R,
    max_len: usize,
) -> impl Iterator<Item = Result<String, AsmError>> {
    reader.lines().map(move |line| {
        let line = line?;
        if line.len() > max_len {
            return Err(AsmError::LineTooLong(max_len));
        }
        Ok(clean_line(&line).to_string())
    })
}
