//! Record-at-a-time executor.
//!
//! Pulls one record from the segmenter, asks the stage for a decision, and
//! writes the record before the next one is read. Only the record under
//! decision is held in memory; its buffer is reused for the next record.

use std::io::{self, BufRead, Write};

use crate::record::Record;
use crate::segmenter::Segmenter;
use crate::stage::{Decision, RecordStage};

/// Record counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Records written to the output.
    pub kept: u64,
    /// Records discarded.
    pub removed: u64,
}

impl RunResult {
    /// Total number of records segmented from the input.
    pub fn total(&self) -> u64 {
        self.kept + self.removed
    }
}

/// Stream `input` through `stage`, writing kept records to `output`.
///
/// Each kept record is written as its original lines followed by a single
/// `\n`. I/O errors abort the run; whatever was written before stays written.
pub fn execute<R, W>(input: R, output: &mut W, stage: &mut dyn RecordStage) -> io::Result<RunResult>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut segmenter = Segmenter::new(input);
    let mut record = Record::new();
    let mut result = RunResult::default();

    while segmenter.next_into(&mut record)? {
        match stage.decide(&record) {
            Decision::Keep => {
                record.write_to(output)?;
                result.kept += 1;
            }
            Decision::Drop => {
                result.removed += 1;
                log::debug!(
                    "record {} dropped by {}: {:?}",
                    result.total(),
                    stage.name(),
                    record.text_lossy().unwrap_or_default()
                );
            }
        }
    }

    Ok(result)
}
