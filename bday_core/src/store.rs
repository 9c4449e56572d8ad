//! Reading the birthday file.
//!
//! The store is a line-oriented flat file: one `Name<TAB>MM/DD[/YYYY]` entry
//! per line, extra tab-separated columns ignored. Blank lines and lines
//! starting with `#` are skipped. Errors carry the 1-based line number and
//! abort the read.

use crate::calendar;
use crate::types::Entry;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads the birthday file at `path`.
pub fn load_file(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path)?;
    let entries = read_entries(BufReader::new(file))?;
    tracing::debug!("loaded {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Reads birthday entries from `reader`, in input order.
pub fn read_entries<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut fields = trimmed.split('\t');
        let name = fields.next().unwrap_or("").trim();
        let birthday_text = match fields.next() {
            Some(text) => text.trim(),
            None => return Err(Error::MalformedLine { line: line_no }),
        };
        let birthday = calendar::parse(birthday_text)
            .map_err(|_| Error::InvalidBirthday { line: line_no })?;
        entries.push(Entry {
            name: name.to_owned(),
            birthday,
        });
    }
    Ok(entries)
}
