//! One blank-line-delimited record of a CoNLL-U style file.
//!
//! A record is kept as the raw bytes of its lines, terminators included, so a
//! kept record is written back exactly as it was read. The buffer is meant to
//! be reused: [`Record::clear`] drops the contents but keeps the allocation.

use std::borrow::Cow;
use std::io::{self, Write};

/// Literal prefix of the line carrying the sentence text.
pub const TEXT_MARKER: &[u8] = b"# text = ";

/// Raw lines of a single record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    bytes: Vec<u8>,
    /// End offset (exclusive) of each line in `bytes`.
    line_ends: Vec<usize>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from raw lines, each including its terminator if any.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut record = Self::new();
        for line in lines {
            record.push_line(line.as_ref());
        }
        record
    }

    /// Append one raw line.
    pub fn push_line(&mut self, line: &[u8]) {
        self.bytes.extend_from_slice(line);
        self.line_ends.push(self.bytes.len());
    }

    /// Remove all lines, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.bytes.clear();
        self.line_ends.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.line_ends.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.line_ends.len()
    }

    /// The record's lines in order, terminators included.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let mut start = 0;
        self.line_ends.iter().map(move |&end| {
            let line = &self.bytes[start..end];
            start = end;
            line
        })
    }

    /// All lines concatenated, byte-for-byte as read.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Value of the first `# text = ` line, without its line terminator.
    ///
    /// Returns `None` when no line carries the marker. A marker line with
    /// nothing after it yields `Some(b"")`.
    pub fn text(&self) -> Option<&[u8]> {
        self.lines()
            .find_map(|line| line.strip_prefix(TEXT_MARKER))
            .map(strip_line_terminator)
    }

    /// [`Record::text`] decoded for display.
    pub fn text_lossy(&self) -> Option<Cow<'_, str>> {
        self.text().map(String::from_utf8_lossy)
    }

    /// Write the record followed by the blank line that separates records.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        out.write_all(b"\n")
    }
}

/// Strip trailing `\r` and `\n` bytes, and nothing else.
pub fn strip_line_terminator(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// True for a line that is empty once its terminator is removed.
///
/// Whitespace-only lines are content, not separators.
pub fn is_separator(line: &[u8]) -> bool {
    strip_line_terminator(line).is_empty()
}
