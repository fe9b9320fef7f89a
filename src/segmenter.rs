//! Splits a line stream into blank-line-separated records.
//!
//! The segmenter pulls one line at a time and never holds more than the
//! record being assembled. Leading and repeated blank lines are ignored, and
//! a last record without a trailing blank line is still produced.

use std::io::{self, BufRead};

use crate::record::{Record, is_separator};

/// Pull-based record reader over any buffered input.
pub struct Segmenter<R> {
    reader: R,
    line: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Segmenter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            done: false,
        }
    }

    /// Read the next record into `record`, replacing its contents.
    ///
    /// Returns `Ok(false)` once the input is exhausted and no lines remain.
    pub fn next_into(&mut self, record: &mut Record) -> io::Result<bool> {
        record.clear();
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(!record.is_empty());
            }
            if !is_separator(&self.line) {
                record.push_line(&self.line);
            } else if !record.is_empty() {
                return Ok(true);
            }
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for Segmenter<R> {
    type Item = io::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut record = Record::new();
        match self.next_into(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Segmenter<R> {}
